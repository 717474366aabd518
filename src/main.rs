extern crate getopts;

use follower_audit::follower_table_util::AuditError;
use follower_audit::nonfollower_util::find_nonfollowers;
use getopts::Options;
use std::fs;
use std::io::{BufWriter, Write};
use std::{env, process};

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
    process::exit(0);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt(
        "a",
        "followers",
        "CSV of accounts that follow you. default is followers.csv.",
        "FILE",
    );
    opts.optopt(
        "b",
        "following",
        "CSV of accounts you follow. default is following.csv.",
        "FILE",
    );
    opts.optopt("o", "output", "write the username list to a file", "NAME");
    opts.optflag("r", "only-num", "outputs only total number of non-followers");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            panic!("{}", f.to_string())
        }
    };
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return;
    }

    let followers_file = if matches.opt_present("a") {
        matches.opt_str("a").unwrap()
    } else {
        "followers.csv".to_string()
    };

    let following_file = if matches.opt_present("b") {
        matches.opt_str("b").unwrap()
    } else {
        "following.csv".to_string()
    };

    eprintln!("followers file: {:?}", followers_file);
    eprintln!("following file: {:?}", following_file);

    let nonfollowers = match find_nonfollowers(&followers_file, &following_file) {
        Ok(list) => list,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    if matches.opt_present("r") {
        println!("Total users not following back: {}", nonfollowers.len());
        return;
    }

    if matches.opt_present("o") {
        let output_file = matches.opt_str("o").unwrap();
        let mut writer = BufWriter::new(
            fs::File::create(&output_file).expect("Failed to create the output file"),
        );
        for username in &nonfollowers {
            writeln!(&mut writer, "{}", username)
                .expect("Failed to write to the output file");
        }
        eprintln!("finish writing to output file: {:?}", &output_file);
        println!("\nTotal users not following back: {}", nonfollowers.len());
        return;
    }

    println!("--- Users Who Do Not Follow You Back ---");
    if !nonfollowers.is_empty() {
        for username in &nonfollowers {
            println!("{}", username);
        }
    } else {
        println!("Congratulations! Everyone you follow also follows you back.");
    }
    println!("\nTotal users not following back: {}", nonfollowers.len());
}

// Errors land on stdout as a summary plus details pair; exit status
// stays zero either way.
fn report_error(e: &AuditError) {
    match e {
        AuditError::FileNotFound { path, source } => {
            println!("Error: The file could not be found. Please check the file path.");
            println!("Details: {} ({})", path, source);
        }
        AuditError::MissingColumn { expected, path } => {
            println!(
                "Error: A '{}' column was not found in one of the files.",
                expected
            );
            println!(
                "Please ensure both files have a column named '{}'. Offending file: {}",
                expected, path
            );
        }
        AuditError::MalformedTable { path, source } => {
            println!("Error: The file could not be parsed as a comma-separated table.");
            println!("Details: {} ({})", path, source);
        }
        AuditError::Io { path, source } => {
            println!("Error: The file could not be read.");
            println!("Details: {} ({})", path, source);
        }
    }
}
