use clap::Parser;
use tally::{AngleUnit, evaluate, preview};

#[derive(Parser)]
#[command(version, about = "Evaluates a calculator expression.")]
struct Args {
    /// Interpret trigonometric arguments as radians instead of degrees.
    #[arg(short, long)]
    radians: bool,

    /// Preview mode: print nothing instead of an error when the input is
    /// incomplete or invalid.
    #[arg(short, long)]
    preview: bool,

    /// The expression to evaluate.
    expression: String,
}

fn main() {
    let args = Args::parse();
    let angle_unit = if args.radians {
        AngleUnit::Radians
    } else {
        AngleUnit::Degrees
    };

    if args.preview {
        if let Some(result) = preview(&args.expression, angle_unit) {
            println!("{result}");
        }

        return;
    }

    match evaluate(&args.expression, angle_unit) {
        Ok(result) => println!("{result}"),

        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        },
    }
}
