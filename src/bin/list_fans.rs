extern crate getopts;

use follower_audit::follower_table_util::load_username_set;
use follower_audit::nonfollower_util::subtract_followers;
use getopts::Options;
use std::{env, process};

// Reverse direction of the main binary: followers you do not follow back.
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
    opts.optflag("r", "only-num", "outputs only total number of fans");
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

    let followers = match load_username_set(&followers_file) {
        Ok(set) => set,
        Err(e) => {
            println!("Error: could not load the followers file.");
            println!("Details: {}", e);
            return;
        }
    };
    let following = match load_username_set(&following_file) {
        Ok(set) => set,
        Err(e) => {
            println!("Error: could not load the following file.");
            println!("Details: {}", e);
            return;
        }
    };

    let mut fans: Vec<String> = Vec::from_iter(subtract_followers(&followers, &following));
    fans.sort();

    if matches.opt_present("r") {
        println!("Total fans you do not follow back: {}", fans.len());
        return;
    }

    println!("--- Followers You Do Not Follow Back ---");
    if !fans.is_empty() {
        for username in &fans {
            println!("{}", username);
        }
    } else {
        println!("You follow back every one of your followers.");
    }
    println!("\nTotal fans you do not follow back: {}", fans.len());
}
