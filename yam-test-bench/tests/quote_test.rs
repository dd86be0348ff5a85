use yam_test_bench::assert_eq_tokens;
use yam_test_bench::consts::*;

#[test]
fn quoted_scalars() {
    assert_eq_tokens(QUOTED_INPUT, QUOTED_TOKENS);
    assert_eq_tokens(QUOTED_MULTILINE_INPUT, QUOTED_MULTILINE_TOKENS);
    assert_eq_tokens(QUOTED_CONTINUATION_INPUT, QUOTED_CONTINUATION_TOKENS);
}

#[test]
fn quoted_err() {
    assert_eq_tokens(QUOTED_UNTERMINATED_INPUT, QUOTED_UNTERMINATED_TOKENS);
    assert_eq_tokens(QUOTED_BAD_ESCAPE_INPUT, QUOTED_BAD_ESCAPE_TOKENS);
}
