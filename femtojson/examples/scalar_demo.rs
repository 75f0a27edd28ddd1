// Example parsing a handful of scalar documents and printing the outcome
//
// Run with: cargo run --example scalar_demo

use femtojson::{parse, Value};

fn main() {
    let documents = [
        "null",
        "  true  ",
        "false",
        "3.1416",
        "-1.5e3",
        "1e-10000",
        "0123",
        "1e309",
        "null x",
        "",
    ];

    for doc in documents {
        match parse(doc) {
            Ok(Value::Number(n)) => println!("{doc:>12?} => number {n}"),
            Ok(value) => println!("{doc:>12?} => {value:?}"),
            Err(e) => println!("{doc:>12?} => error: {e}"),
        }
    }
}
