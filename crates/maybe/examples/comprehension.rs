//! Adds the integers given as the first three arguments. A missing or
//! unparsable argument makes the whole sum absent.
//!
//! cargo run -p maybe --example comprehension -- 5 7 3

use maybe::Maybe;

fn arg(args: &[String], index: usize) -> Maybe<i64> {
    Maybe::from(args.get(index).and_then(|raw| raw.parse::<i64>().ok()))
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let total = arg(&args, 0)
        .try_select_many(|_| Some(arg(&args, 1)), |a, b| a + b)?
        .select_many(|_| arg(&args, 2), |ab, c| ab + c);

    let line = total.switch(|sum| format!("sum: {sum}"), || "sum: nothing".to_owned());
    println!("{line}");
    Ok(())
}
