use std::path::PathBuf;

use filament_estimator::parser::{ParsedLine, parse_line};
use filament_estimator::parse_file;

fn describe(parsed: &ParsedLine) -> String {
    match parsed {
        ParsedLine::Instruction(instr) => format!(
            "Instruction: command={:?} parameters={:?} comment={:?}",
            instr.command, instr.parameters, instr.comment
        ),
        ParsedLine::Metadata(meta) => format!("Metadata: {:?}", meta.text),
    }
}

fn main() -> anyhow::Result<()> {
    // With a path argument, dump that file instead of the samples
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        for parsed in parse_file(&path)? {
            println!("{}", describe(&parsed));
        }
        return Ok(());
    }

    println!("=== Token Dump ===");

    let test_lines = [
        ";filament_type = PLA",
        ";LAYER:1",
        "G1 X10 Y20.5 E.0421 ; perimeter",
        "G1 E-.8 F2100",
        "M600",
        ";",
        "   ",
    ];

    for line in test_lines {
        println!("\nInput: '{}'", line);
        match parse_line(line) {
            Ok(parsed) => println!("{}", describe(&parsed)),
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}
