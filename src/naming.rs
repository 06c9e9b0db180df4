//! File naming convention for test cases.
//!
//! An input file is named `<stem>.in.<ext>`; its expected output lives next
//! to it as `<stem>.out.<ext>`. The display name of the case is the stem with
//! every `-` turned into a space, so `test-A.in.txt` is shown as `test A`.

/// Splits `name` into root and extension at the last dot.
///
/// The extension keeps its leading dot. Leading dots of the name itself never
/// start an extension, so `.in` has an empty extension.
pub fn split_ext(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) => name.split_at(leading + idx),
        None => (name, ""),
    }
}

/// The parts of an input file name that both derived names are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputName<'a> {
    pub stem: &'a str,
    /// Outer extension including its dot; may be empty.
    pub ext: &'a str,
}

impl<'a> InputName<'a> {
    /// Returns `None` unless the inner extension is exactly `.in`.
    pub fn parse(name: &'a str) -> Option<Self> {
        let (root, ext) = split_ext(name);
        let (stem, inner) = split_ext(root);
        (inner == ".in").then_some(Self { stem, ext })
    }

    pub fn test_name(&self) -> String {
        self.stem.replace('-', " ")
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.out{}", self.stem, self.ext)
    }
}

pub fn is_input_file(name: &str) -> bool {
    InputName::parse(name).is_some()
}

fn expect_input_name(name: &str) -> InputName<'_> {
    match InputName::parse(name) {
        Some(parsed) => parsed,
        None => panic!("'{name}' is not a test input file name (<name>.in.<ext>)"),
    }
}

/// # Panics
/// If `name` does not satisfy [`is_input_file`].
pub fn construct_test_name(name: &str) -> String {
    expect_input_name(name).test_name()
}

/// # Panics
/// If `name` does not satisfy [`is_input_file`].
pub fn construct_output_file_name(name: &str) -> String {
    expect_input_name(name).output_file_name()
}
