// Demo binary: parse each command line argument as a JSON scalar document
//
// Run with: cargo run -p demos -- null true 3.14 "1e309" "0123"

use femtojson::{parse, Value};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: demos <json-document>...");
        std::process::exit(2);
    }

    let mut failures = 0;
    for doc in &args {
        match parse(doc) {
            Ok(Value::Number(n)) => println!("{doc:?}: number {n}"),
            Ok(value) => println!("{doc:?}: {value:?}"),
            Err(e) => {
                println!("{doc:?}: error: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
