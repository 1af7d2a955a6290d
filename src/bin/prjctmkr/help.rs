//! Informational output: the help text and the example project layout.

use prjctmkr::builder::context::{BUILD_FOLDER, TESTS_FOLDER};
use prjctmkr::core::Operation;
use prjctmkr::util::config::{COMPILER_ENV, DEFAULT_COMPILE};
use prjctmkr::util::diagnostic::PROGRAM_NAME;

const HELP_CODE: char = 'h';
const STRUCTURE_CODE: char = 's';

/// Listing order: targeted operations first, then their whole-tree forms.
const LISTED: [Operation; 6] = [
    Operation::Build,
    Operation::Tests,
    Operation::Clean,
    Operation::BuildAll,
    Operation::TestsAll,
    Operation::CleanAll,
];

fn describe(operation: Operation) -> String {
    match operation {
        Operation::Build => format!("compiles any provided .c files into ./{BUILD_FOLDER}/*.o"),
        Operation::Tests => format!("compiles any provided .c files into ./{TESTS_FOLDER}/*.o"),
        Operation::Clean => {
            format!("deletes any provided .o files in ./{BUILD_FOLDER} and ./{TESTS_FOLDER}")
        }
        Operation::BuildAll => format!(
            "compiles all .c files outside of ./{TESTS_FOLDER} into ./{BUILD_FOLDER}/*.o"
        ),
        Operation::TestsAll => format!(
            "compiles all .c files inside of ./{TESTS_FOLDER} into ./{TESTS_FOLDER}/*.o"
        ),
        Operation::CleanAll => {
            format!("deletes all .o files in both ./{BUILD_FOLDER} and ./{TESTS_FOLDER}")
        }
    }
}

pub fn help_text() -> String {
    let codes: String = LISTED
        .iter()
        .map(|op| op.code())
        .chain([HELP_CODE, STRUCTURE_CODE])
        .collect();

    let mut text = String::new();
    text.push_str(&format!("\n  {PROGRAM_NAME}:\n"));
    text.push_str("    C-compiling utility meant to be used with 'make'\n");
    text.push_str("    for managing multiple .c files in nested folders\n");
    text.push_str(&format!(
        "\n  usage: {PROGRAM_NAME} [{codes}] files.c go.c here.o ...\n"
    ));

    text.push_str("\n  operations:\n");
    for op in LISTED {
        text.push_str(&format!("    [{}] {}: {}\n", op.code(), op.name(), describe(op)));
    }
    text.push_str(&format!("    [{HELP_CODE}] help: displays this help text\n"));
    text.push_str(&format!(
        "    [{STRUCTURE_CODE}] structure: displays an example project structure\n"
    ));

    text.push_str("\n  notes:\n");
    text.push_str("    - the compile command is read from the environment or --compiler\n");
    text.push_str(&format!(
        "      eg. export {COMPILER_ENV}='cc68x -g' (default: '{DEFAULT_COMPILE}')\n"
    ));
    text.push_str("    - use '/' to separate directories (eg. project/src)\n");
    text.push_str("    - use paths relative to the project root for 'build'\n");
    text.push_str(&format!(
        "    - only .o files in {BUILD_FOLDER} and {TESTS_FOLDER} are ever deleted\n"
    ));
    text.push_str("    - wildcard arguments (eg. 'src/*.c') are expanded by the tool\n");
    text.push_str("    - run with --help for the full list of options\n");
    text
}

pub fn structure_text() -> String {
    let lines = [
        "./project".to_string(),
        format!("|> {PROGRAM_NAME}"),
        "|> makefile".to_string(),
        "|> main.c".to_string(),
        "|> ./source".to_string(),
        "   |> source.c".to_string(),
        "   |> ./sub_folder_c".to_string(),
        "      |> sub.c".to_string(),
        "|> ./library".to_string(),
        "   |> library.c".to_string(),
        format!("|> {BUILD_FOLDER}"),
        "   |> main.o".to_string(),
        "   |> source.o".to_string(),
        "   |> sub.o".to_string(),
        "   |> library.o".to_string(),
        format!("|> {TESTS_FOLDER}"),
        "   |> test.c".to_string(),
        "   |> test.o".to_string(),
    ];

    let mut text = String::from("\n");
    for line in lines {
        text.push_str("   ");
        text.push_str(&line);
        text.push('\n');
    }
    text
}
