//! cidstamp info コマンド
//!
//! ステップの説明と入出力変数を表示する。

use cidstamp::step::{Variable, DESCRIPTION, INPUT_VARIABLES, OUTPUT_VARIABLES};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StepInfo {
    description: &'static str,
    input_variables: &'static [Variable],
    output_variables: &'static [Variable],
}

pub fn run(args: Args) -> Result<(), String> {
    if args.json {
        print_json()
    } else {
        print_tables();
        Ok(())
    }
}

fn print_json() -> Result<(), String> {
    let info = StepInfo {
        description: DESCRIPTION,
        input_variables: INPUT_VARIABLES,
        output_variables: OUTPUT_VARIABLES,
    };
    serde_json::to_string_pretty(&info)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize step info: {}", e))
}

fn print_tables() {
    println!("{}", DESCRIPTION);
    println!();
    println!("Input variables:");
    println!("{}", variable_table(INPUT_VARIABLES));
    println!();
    println!("Output variables:");
    println!("{}", variable_table(OUTPUT_VARIABLES));
}

fn variable_table(variables: &[Variable]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Required", "Description"]);

    for variable in variables {
        table.add_row(vec![
            variable.name,
            if variable.required { "yes" } else { "no" },
            variable.description,
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_table_lists_all_inputs() {
        let rendered = variable_table(INPUT_VARIABLES).to_string();
        assert!(rendered.contains("pkginfo_path"));
        assert!(rendered.contains("artifact_path"));
        assert!(rendered.contains("yes"));
    }

    #[test]
    fn test_step_info_json_shape() {
        let info = StepInfo {
            description: DESCRIPTION,
            input_variables: INPUT_VARIABLES,
            output_variables: OUTPUT_VARIABLES,
        };
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["input_variables"][0]["name"], "pkginfo_path");
        assert_eq!(value["output_variables"][0]["name"], "content_id");
        assert_eq!(value["output_variables"][0]["required"], false);
    }
}
