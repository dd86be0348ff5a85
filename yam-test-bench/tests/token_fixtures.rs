extern crate libtest_mimic;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use yam_test_bench::dump_tokens;

#[derive(Default)]
struct TestData {
    desc: String,
    input_yaml: PathBuf,
    out_tokens: PathBuf,
    is_error: bool,
}

fn perform_test(data: TestData) -> Result<(), Failed> {
    let input_yaml = fs::read_to_string(data.input_yaml)?;
    let expected = fs::read_to_string(data.out_tokens)?;
    let actual = dump_tokens(&input_yaml);

    let has_errors = actual.contains("\nERR ");
    if has_errors != data.is_error {
        return Err(format!("expected error: {}, got dump:{actual}", data.is_error).into());
    }
    assert_eq!(actual.trim(), expected.trim().replace("\r\n", "\n"));
    Ok(())
}

fn collect_test(
    dir_name: String,
    test_dir_path: &Path,
    tests: &mut Vec<Trial>,
) -> Result<(), Box<dyn Error>> {
    let mut test_data = TestData::default();
    for entry in fs::read_dir(test_dir_path)? {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        match &*filename {
            "===" => {
                if let Ok(desc) = fs::read_to_string(entry.path()) {
                    test_data.desc = String::from(desc.trim());
                }
            }
            "in.yaml" => test_data.input_yaml = entry.path(),
            "out.tokens" => test_data.out_tokens = entry.path(),
            "error" => test_data.is_error = true,
            _ => {}
        }
    }
    let test = Trial::test(format!("{} ({})", dir_name, &test_data.desc), move || {
        perform_test(test_data)
    });
    tests.push(test);
    Ok(())
}

fn collect_tests(path: &Path) -> Result<Vec<Trial>, Box<dyn Error>> {
    let mut tests = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let dir_name = entry.file_name().to_string_lossy().into_owned();
            collect_test(dir_name, &entry.path(), &mut tests)?;
        }
    }
    Ok(tests)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();

    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");

    let tests = collect_tests(&path)?;

    libtest_mimic::run(&args, tests).exit();
}
