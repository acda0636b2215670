use {
    amphipod::{burrow::Solution, open_utf8_file, Args},
    clap::Parser,
    std::{
        io::{read_to_string, stdin},
        process::exit,
    },
};

fn run(args: &Args, input: &str) -> i32 {
    match Solution::try_from(input) {
        Ok(solution) => {
            if args.verbose {
                print!("{solution}");
            }

            match solution.try_min_organize_energy() {
                Some(energy) => {
                    println!("{energy}");

                    0_i32
                }
                None => {
                    eprintln!("No sequence of legal moves organizes the amphipods");

                    1_i32
                }
            }
        }
        Err(error) => {
            eprintln!("Failed to parse burrow diagram:\n{error:#?}");

            1_i32
        }
    }
}

fn main() {
    let args: Args = Args::parse();

    let exit_code: i32 = match args.input_file_path() {
        Some(file_path) => {
            // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before
            // we're done parsing it
            unsafe { open_utf8_file(file_path, |input| run(&args, input)) }.unwrap_or_else(
                |error| {
                    eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

                    1_i32
                },
            )
        }
        None => match read_to_string(stdin()) {
            Ok(input) => run(&args, &input),
            Err(error) => {
                eprintln!("Failed to read standard input:\n{error}");

                1_i32
            }
        },
    };

    exit(exit_code);
}
