use std::io::{self, Write};

use atelier::pricing::to_money;
use rust_decimal::Decimal;
use rusty_money::iso;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Render `builder` to stdout, right-aligning `numeric` columns.
pub(crate) fn print_table(builder: Builder, numeric: &[usize]) -> Result<(), String> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    for &column in numeric {
        table.modify(Columns::one(column), Alignment::right());
    }

    writeln!(io::stdout().lock(), "{table}")
        .map_err(|error| format!("failed to write output: {error}"))
}

/// Store prices are dollar amounts.
pub(crate) fn price(amount: Decimal) -> String {
    to_money(amount, iso::USD).map_or_else(|_err| amount.to_string(), |money| money.to_string())
}

