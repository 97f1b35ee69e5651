//! Blocking terminal questions. Every prompt re-asks until the answer
//! validates, so callers only see well-formed values or an I/O error.
use dialoguer::Input;
use dialoguer::Select;
use std::ops::RangeInclusive;

/// Parse a y/yes/n/no answer, ignoring case and surrounding space.
pub fn yes_no(answer: &str) -> Result<bool, String> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(String::from("Sorry, must be y or n.")),
    }
}

/// Parse a whole number inside `range`.
pub fn number_in(answer: &str, range: &RangeInclusive<usize>) -> Result<usize, String> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| range.contains(n))
        .ok_or_else(|| format!("Enter a number from {} to {}.", range.start(), range.end()))
}

/// Parse a positive whole number.
pub fn positive(answer: &str) -> Result<usize, String> {
    number_in(answer, &(1..=usize::MAX)).map_err(|_| String::from("Please enter a positive integer."))
}

pub fn ask_yes_no(prompt: &str) -> anyhow::Result<bool> {
    let answer = Input::<String>::new()
        .with_prompt(format!("{} (y/n)", prompt))
        .validate_with(|i: &String| yes_no(i).map(|_| ()))
        .interact_text()?;
    Ok(yes_no(&answer).unwrap_or_default())
}

pub fn ask_name(prompt: &str) -> anyhow::Result<String> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.trim().is_empty() {
                true => Err("Sorry, must enter a value."),
                false => Ok(()),
            }
        })
        .interact_text()?;
    Ok(answer.trim().to_string())
}

pub fn ask_number(prompt: &str, range: RangeInclusive<usize>) -> anyhow::Result<usize> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|i: &String| number_in(i, &range).map(|_| ()))
        .interact_text()?;
    number_in(&answer, &range).map_err(anyhow::Error::msg)
}

pub fn ask_positive(prompt: &str) -> anyhow::Result<usize> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|i: &String| positive(i).map(|_| ()))
        .interact_text()?;
    positive(&answer).map_err(anyhow::Error::msg)
}

/// Free-form answer checked by `parse`; the parsed value is returned.
pub fn ask_parsed<T, F>(prompt: &str, parse: F) -> anyhow::Result<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|i: &String| parse(i.as_str()).map(|_| ()))
        .interact_text()?;
    parse(&answer).map_err(anyhow::Error::msg)
}

/// Menu selection; returns the chosen index.
pub fn ask_choice<T>(prompt: &str, items: &[T]) -> anyhow::Result<usize>
where
    T: ToString,
{
    Ok(Select::new()
        .with_prompt(prompt)
        .report(false)
        .items(items)
        .default(0)
        .interact()?)
}

pub fn wait_for_enter(prompt: &str) -> anyhow::Result<()> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(())
}
