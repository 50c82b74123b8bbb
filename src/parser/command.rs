// Command parsers for the chart request DSL

use super::ast::ChartType;
use super::lexer::{identifier, string_literal, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, opt},
    sequence::preceded,
    IResult,
};

/// One component of a request pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Chart {
        chart_type: ChartType,
        category: String,
        value: Option<String>,
    },
    Filter {
        column: String,
        value: String,
    },
}

/// Column names and filter values: bare identifier or quoted string
fn operand(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier))(input)
}

fn chart_type(input: &str) -> IResult<&str, ChartType> {
    alt((
        map(tag("pie"), |_| ChartType::Pie),
        map(tag("bar"), |_| ChartType::Bar),
        map(tag("histogram"), |_| ChartType::Histogram),
        map(tag("line"), |_| ChartType::Line),
        map(tag("scatter"), |_| ChartType::Scatter),
    ))(input)
}

/// Parse a chart command
/// Format: pie(category: region) or bar(category: region, value: sales)
pub fn parse_chart(input: &str) -> IResult<&str, Command> {
    let (input, chart_type) = ws(chart_type)(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, _) = ws(tag("category:"))(input)?;
    let (input, category) = ws(operand)(input)?;

    // Optional value column (ignored by histogram, required by line/scatter)
    let (input, value) = opt(preceded(
        ws(char(',')),
        preceded(ws(tag("value:")), ws(operand)),
    ))(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((
        input,
        Command::Chart {
            chart_type,
            category,
            value,
        },
    ))
}

/// Parse a filter command
/// Format: filter(column: region, value: West) or filter(column: region, value: "North West")
pub fn parse_filter(input: &str) -> IResult<&str, Command> {
    let (input, _) = ws(tag("filter"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, _) = ws(tag("column:"))(input)?;
    let (input, column) = ws(operand)(input)?;
    let (input, _) = ws(char(','))(input)?;

    let (input, _) = ws(tag("value:"))(input)?;
    let (input, value) = ws(operand)(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((input, Command::Filter { column, value }))
}

/// Parse any command
pub fn parse_command(input: &str) -> IResult<&str, Command> {
    alt((parse_filter, parse_chart))(input)
}
