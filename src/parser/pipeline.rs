// Pipeline parser: commands joined by "|" folded into one ChartRequest

use super::ast::ChartRequest;
use super::command::{parse_command, Command};
use super::lexer::ws;
use nom::{
    bytes::complete::tag,
    combinator::eof,
    error::{Error, ErrorKind},
    multi::separated_list0,
    IResult,
};

/// Parse a complete chart request
/// Format: chart-command [| filter-command]
pub fn parse_chart_request(input: &str) -> IResult<&str, ChartRequest> {
    let (input, components) = separated_list0(ws(tag("|")), parse_command)(input)?;

    // Consume trailing whitespace and ensure end of input
    let (input, _) = ws(eof)(input)?;

    let mut request = ChartRequest::default();
    let mut has_chart = false;

    for comp in components {
        match comp {
            Command::Chart {
                chart_type,
                category,
                value,
            } => {
                // Exactly one chart command per request
                if has_chart {
                    return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
                }
                has_chart = true;
                request.chart_type = chart_type;
                request.category_column = category;
                request.value_column = value;
            }
            Command::Filter { column, value } => {
                if request.filter_column.is_some() {
                    return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
                }
                request.filter_column = Some(column);
                request.filter_value = Some(value);
            }
        }
    }

    if !has_chart {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }

    Ok((input, request))
}
