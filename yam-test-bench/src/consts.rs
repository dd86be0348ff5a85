pub const BLOCK_SEQ_INPUT: &str = r"
- x
- y
";
pub const BLOCK_SEQ_TOKENS: &str = r"
0 -
2 =VAL x
0 -
2 =VAL y
-STR";
pub const X_3ALJ_INPUT: &str = r"
- - s1_i1
  - s1_i2
- s2
";
pub const X_3ALJ_TOKENS: &str = r"
0 -
2 -
4 =VAL s1_i1
2 -
4 =VAL s1_i2
0 -
2 =VAL s2
-STR";
pub const SEQ_PLAIN_INPUT: &str = r"
- x - y
";
pub const SEQ_PLAIN_TOKENS: &str = r"
0 -
2 =VAL x - y
-STR";
pub const BLOCK_PLAIN_INPUT: &str = r"
  a
  b
  c
    d
  e
";
pub const BLOCK_PLAIN_TOKENS: &str = r"
2 =VAL a b c d e
-STR";
pub const BLOCK_MAP_INPUT: &str = r"
key: value
nested:
  inner: 1
  other: two
    words
last: x
";
pub const BLOCK_MAP_TOKENS: &str = r"
0 =VAL key
3 :
5 =VAL value
0 =VAL nested
6 :
2 =VAL inner
7 :
9 =VAL 1
2 =VAL other
7 :
9 =VAL two words
0 =VAL last
4 :
6 =VAL x
-STR";
pub const SEQ_IN_MAP_INPUT: &str = r"
list:
- a
- b
";
pub const SEQ_IN_MAP_TOKENS: &str = r"
0 =VAL list
4 :
0 -
2 =VAL a
0 -
2 =VAL b
-STR";
pub const EXPLICIT_KEY_INPUT: &str = r"
? complex
  key
: value
";
pub const EXPLICIT_KEY_TOKENS: &str = r"
0 ?
2 =VAL complex key
0 :
2 =VAL value
-STR";

pub const FLOW_SEQ_INPUT: &str = r"
[a, b c, 'd']
";
pub const FLOW_SEQ_TOKENS: &str = r"
0 [
1 =VAL a
2 ,
4 =VAL b c
7 ,
9 =VAL d
12 ]
-STR";
pub const FLOW_NESTED_INPUT: &str = r"
{ a: 1,
  b: [x,
   y] }
";
pub const FLOW_NESTED_TOKENS: &str = r"
0 {
2 =VAL a
3 :
5 =VAL 1
6 ,
2 =VAL b
3 :
5 [
6 =VAL x
7 ,
3 =VAL y
4 ]
6 }
-STR";
pub const FLOW_MULTILINE_INPUT: &str = r"
[one
 two, three]
";
pub const FLOW_MULTILINE_TOKENS: &str = r"
0 [
1 =VAL one two
4 ,
6 =VAL three
11 ]
-STR";
pub const FLOW_IN_BLOCK_INPUT: &str = r"
- [name        , hr, avg  ]
- [Mark McGwire, 65, 0.278]
";
pub const FLOW_IN_BLOCK_TOKENS: &str = r"
0 -
2 [
3 =VAL name
15 ,
17 =VAL hr
19 ,
21 =VAL avg
26 ]
0 -
2 [
3 =VAL Mark McGwire
15 ,
17 =VAL 65
19 ,
21 =VAL 0.278
26 ]
-STR";
pub const FLOW_URL_INPUT: &str = r"
{url: http://example.com}
";
pub const FLOW_URL_TOKENS: &str = r"
0 {
1 =VAL url
4 :
6 =VAL http:
-STR";

pub const QUOTED_INPUT: &str = r#"
single: 'it''s'
double: "tab\tnew\nline"
"#;
pub const QUOTED_TOKENS: &str = r"
0 =VAL single
6 :
8 =VAL it's
0 =VAL double
6 :
8 =VAL tab\tnew\nline
-STR";
pub const QUOTED_MULTILINE_INPUT: &str = r#"
key: "first
  second

  third"
"#;
pub const QUOTED_MULTILINE_TOKENS: &str = r"
0 =VAL key
3 :
5 =VAL first second\nthird
-STR";
pub const QUOTED_CONTINUATION_INPUT: &str = r#"
- "a \
   b"
"#;
pub const QUOTED_CONTINUATION_TOKENS: &str = r"
0 -
2 =VAL a b
-STR";
pub const QUOTED_UNTERMINATED_INPUT: &str = r#"
"unterminated
"#;
pub const QUOTED_UNTERMINATED_TOKENS: &str = r"
0 =VAL unterminated
-STR
ERR UnterminatedQuotedString";
pub const QUOTED_BAD_ESCAPE_INPUT: &str = r#"
"\q"
"#;
pub const QUOTED_BAD_ESCAPE_TOKENS: &str = r"
0 =VAL q
-STR
ERR InvalidEscapeSequence";

pub const LITERAL_INPUT: &str = r"
text: |
  line one
  line two

after: x
";
pub const LITERAL_TOKENS: &str = r"
0 =VAL text
4 :
6 =VAL line one\nline two\n
0 =VAL after
5 :
7 =VAL x
-STR";
pub const FOLDED_INPUT: &str = r"
- >-
  folded
  text

  para
    more
  end
";
pub const FOLDED_TOKENS: &str = r"
0 -
2 =VAL folded text\npara\n  more\nend
-STR";
pub const CHOMP_INPUT: &str = r"
a: |+
  keep

b: |-
  strip

c: end
";
pub const CHOMP_TOKENS: &str = r"
0 =VAL a
1 :
3 =VAL keep\n\n
0 =VAL b
1 :
3 =VAL strip
0 =VAL c
1 :
3 =VAL end
-STR";
pub const FOLD_STR1_INPUT: &str = r"
  - >1-
   1
    2
   3
   4

";
pub const FOLD_STR1_TOKENS: &str = r"
2 -
4 =VAL 1\n 2\n3 4
-STR";
pub const FOLD_STR2_INPUT: &str = r"
 >


  valid
";
pub const FOLD_STR2_TOKENS: &str = r"
1 =VAL \n\nvalid\n
-STR";
pub const BLOCK_INDICATOR_INPUT: &str = r"
- |1
  two spaces
";
pub const BLOCK_INDICATOR_TOKENS: &str = r"
0 -
2 =VAL  two spaces\n
-STR";
pub const BLOCK_CUT_INPUT: &str = "|\n  no newline";
pub const BLOCK_CUT_TOKENS: &str = r"
0 =VAL no newline\n
-STR
ERR UnterminatedBlockScalar";

pub const PROPS_INPUT: &str = r"
- !!str &anchor value
- *anchor
- !<tag:yaml.org,2002:int> 42
- !e!local x
";
pub const PROPS_TOKENS: &str = r"
0 -
2 =TAG !!str
8 =ANC anchor
16 =VAL value
0 -
2 =ALI anchor
0 -
2 =TAG !<tag:yaml.org,2002:int>
27 =VAL 42
0 -
2 =TAG !e!local
11 =VAL x
-STR";
pub const PROPS_KEY_INPUT: &str = r"
&a key:
  &b value
";
pub const PROPS_KEY_TOKENS: &str = r"
0 =ANC a
3 =VAL key
6 :
2 =ANC b
5 =VAL value
-STR";
pub const TAG_UNTERMINATED_INPUT: &str = "!<tag";
pub const TAG_UNTERMINATED_TOKENS: &str = r"
0 =TAG !<tag
-STR
ERR UnterminatedVerbatimTag";

pub const COMMENTS_INPUT: &str = r"
# leading
key: value # trailing
// c-style
list: [a, /* inline */ b]
";
pub const COMMENTS_TOKENS: &str = r"
0 =VAL key
3 :
5 =VAL value
0 =VAL list
4 :
6 [
7 =VAL a
8 ,
23 =VAL b
24 ]
-STR";
pub const COMMENT_UNTERMINATED_INPUT: &str = r"
a
/* open
";
pub const COMMENT_UNTERMINATED_TOKENS: &str = r"
0 =VAL a
-STR
ERR UnterminatedBlockComment";
