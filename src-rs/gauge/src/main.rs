use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use gauge_quantity::Quantity;
use gauge_unit::{LengthUnit, Unit, WeightUnit};

use crate::{
    command::{CliCommand, Commands},
    printer::Printer,
};

mod command;
mod printer;

fn main() -> io::Result<ExitCode> {
    let cli = CliCommand::parse();
    let mut writer = anstream::stdout();

    match cli.command {
        Commands::Demo { no_colors } => {
            let mut printer = Printer::new(!no_colors, &mut writer);
            run_demo(&mut printer)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Convert {
            value,
            from,
            to,
            no_colors,
        } => {
            let mut printer = Printer::new(!no_colors, &mut writer);
            run_convert(&mut printer, value, &from, &to)
        }
        Commands::Compare {
            value_a,
            unit_a,
            value_b,
            unit_b,
            no_colors,
        } => {
            let mut printer = Printer::new(!no_colors, &mut writer);
            run_compare(&mut printer, value_a, &unit_a, value_b, &unit_b)
        }
        Commands::Units { no_colors } => {
            let mut printer = Printer::new(!no_colors, &mut writer);
            run_units(&mut printer)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_demo<W: Write>(printer: &mut Printer<'_, W>) -> io::Result<()> {
    let foot = Quantity::new(1.0, LengthUnit::Foot).expect("demo values are finite");
    let twelve_inches = Quantity::new(12.0, LengthUnit::Inches).expect("demo values are finite");
    let yard = Quantity::new(1.0, LengthUnit::Yard).expect("demo values are finite");
    let three_feet = Quantity::new(3.0, LengthUnit::Feet).expect("demo values are finite");
    let thirty_six_inches =
        Quantity::new(36.0, LengthUnit::Inches).expect("demo values are finite");

    printer.print_section("length")?;
    printer.print_check("1 foot == 12 inches", foot.same_as(twelve_inches))?;
    printer.print_check("1 yard == 3 feet", yard.same_as(three_feet))?;
    printer.print_check("1 yard == 36 inches", yard.same_as(thirty_six_inches))?;
    printer.print_check("1 foot == 1 yard", foot.same_as(yard))?;

    let sum = foot.add(twelve_inches).expect("demo sums stay finite");
    printer.print_line(&format!("1 foot + 12 inches = {sum}"))?;

    let kilogram = Quantity::new(1.0, WeightUnit::Kilogram).expect("demo values are finite");
    let thousand_grams = Quantity::new(1000.0, WeightUnit::Gram).expect("demo values are finite");
    let two_pounds = Quantity::new(2.0, WeightUnit::Pound).expect("demo values are finite");
    let pound = Quantity::new(1.0, WeightUnit::Pound).expect("demo values are finite");

    printer.print_line("")?;
    printer.print_section("weight")?;
    printer.print_check("1 kilogram == 1000 grams", kilogram.same_as(thousand_grams))?;
    printer.print_check("1 kilogram == 2 pounds", kilogram.same_as(two_pounds))?;

    let total = kilogram
        .add_into(pound, WeightUnit::Gram)
        .expect("demo sums stay finite");
    printer.print_line(&format!("1 kilogram + 1 pound = {total}"))?;

    Ok(())
}

fn run_convert<W: Write>(
    printer: &mut Printer<'_, W>,
    value: f64,
    from: &str,
    to: &str,
) -> io::Result<ExitCode> {
    let outcome = match resolve_unit_pair(from, to) {
        Ok(UnitPair::Length(from, to)) => render_conversion(value, from, to),
        Ok(UnitPair::Weight(from, to)) => render_conversion(value, from, to),
        Err(message) => Err(message),
    };

    match outcome {
        Ok(line) => {
            printer.print_result(&line)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            printer.print_error(&message)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_compare<W: Write>(
    printer: &mut Printer<'_, W>,
    value_a: f64,
    unit_a: &str,
    value_b: f64,
    unit_b: &str,
) -> io::Result<ExitCode> {
    let outcome = match resolve_unit_pair(unit_a, unit_b) {
        Ok(UnitPair::Length(unit_a, unit_b)) => render_comparison(value_a, unit_a, value_b, unit_b),
        Ok(UnitPair::Weight(unit_a, unit_b)) => render_comparison(value_a, unit_a, value_b, unit_b),
        Err(message) => Err(message),
    };

    match outcome {
        Ok((label, holds)) => {
            printer.print_check(&label, holds)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            printer.print_error(&message)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_units<W: Write>(printer: &mut Printer<'_, W>) -> io::Result<()> {
    printer.print_section("length (base: inch)")?;
    for line in unit_lines::<LengthUnit>() {
        printer.print_line(&line)?;
    }

    printer.print_line("")?;
    printer.print_section("weight (base: kilogram)")?;
    for line in unit_lines::<WeightUnit>() {
        printer.print_line(&line)?;
    }

    Ok(())
}

fn render_conversion<U: Unit>(value: f64, from: U, to: U) -> Result<String, String> {
    let source = Quantity::new(value, from).map_err(|error| error.to_string())?;
    let converted = source.convert_to(to).map_err(|error| error.to_string())?;

    Ok(format!("{source} = {converted}"))
}

fn render_comparison<U: Unit>(
    value_a: f64,
    unit_a: U,
    value_b: f64,
    unit_b: U,
) -> Result<(String, bool), String> {
    let left = Quantity::new(value_a, unit_a).map_err(|error| error.to_string())?;
    let right = Quantity::new(value_b, unit_b).map_err(|error| error.to_string())?;

    Ok((format!("{left} == {right}"), left.same_as(right)))
}

fn unit_lines<U: Unit>() -> Vec<String> {
    U::ALL
        .iter()
        .map(|unit| {
            let mut line = format!(
                "  {:<12} 1 {} = {} {}",
                unit.name(),
                unit.name(),
                unit.factor(),
                U::BASE.name()
            );
            if unit.canonical() != *unit {
                line.push_str(&format!(" (alias of {})", unit.canonical().name()));
            }
            line
        })
        .collect()
}

/// The two units of a conversion or comparison, resolved to one domain.
enum UnitPair {
    Length(LengthUnit, LengthUnit),
    Weight(WeightUnit, WeightUnit),
}

enum AnyUnit {
    Length(LengthUnit),
    Weight(WeightUnit),
}

fn resolve_unit_pair(from: &str, to: &str) -> Result<UnitPair, String> {
    match (parse_any_unit(from)?, parse_any_unit(to)?) {
        (AnyUnit::Length(from), AnyUnit::Length(to)) => Ok(UnitPair::Length(from, to)),
        (AnyUnit::Weight(from), AnyUnit::Weight(to)) => Ok(UnitPair::Weight(from, to)),
        (AnyUnit::Length(_), AnyUnit::Weight(_)) | (AnyUnit::Weight(_), AnyUnit::Length(_)) => {
            Err("cannot mix length and weight units".to_string())
        }
    }
}

/// Tries the length units first, then the weight units.
fn parse_any_unit(text: &str) -> Result<AnyUnit, String> {
    if let Ok(unit) = text.parse::<LengthUnit>() {
        return Ok(AnyUnit::Length(unit));
    }
    if let Ok(unit) = text.parse::<WeightUnit>() {
        return Ok(AnyUnit::Weight(unit));
    }

    Err(format!("unknown unit: {text:?}"))
}
