use std::{fs, path::Path};

use sluc::get_output;
use walkdir::WalkDir;

#[test]
fn sample_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "c"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);

        count += 1;
        match get_output(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?} differs"),
            Err(e) => panic!("Program {path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn default_program_runs() {
    let source = fs::read_to_string("simple.c").expect("simple.c is missing");

    assert!(get_output(&source).is_ok());
}

fn read_expected(program: &Path) -> String {
    let path = program.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
