use std::path::Path;

use nom::{
    bytes::complete::take_till1,
    character::complete::{multispace0, multispace1},
    number::complete::double,
    sequence::{preceded, separated_pair},
    IResult,
};

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{HeaderParser, RasterHeader};

    #[test]
    fn parses_a_full_header() {
        let header = HeaderParser::parse(
            "ncols 4\nnrows 3\nxllcorner 100.5\nyllcorner -20.25\ncellsize 2.5\nNODATA_value -9999\n",
        );

        assert_eq!(4, header.ncols);
        assert_eq!(3, header.nrows);
        assert_eq!(100.5, header.xllcorner);
        assert_eq!(-20.25, header.yllcorner);
        assert_eq!(2.5, header.cellsize);
        assert_eq!(-9999.0, header.nodata);
    }

    #[test]
    fn last_value_wins_for_duplicated_keys() {
        let header = HeaderParser::parse("ncols 4 ncols 7 nrows 2");

        assert_eq!(7, header.ncols);
        assert_eq!(2, header.nrows);
    }

    #[test]
    fn unrecognized_keys_are_skipped() {
        let header = HeaderParser::parse("ncols 4 zresolution 0.01 nrows 2");

        assert_eq!(4, header.ncols);
        assert_eq!(2, header.nrows);
    }

    #[test]
    fn missing_keys_leave_defaults() {
        let header = HeaderParser::parse("ncols 4 nrows 2");

        assert_eq!(0.0, header.cellsize);
        assert_eq!(-9999.0, header.nodata);
    }

    #[test]
    fn parsing_stops_at_the_first_non_numeric_value() {
        let header = HeaderParser::parse("ncols 4 byteorder LSBFIRST nrows 2");

        assert_eq!(4, header.ncols);
        assert_eq!(0, header.nrows);
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    #[case("just words no numbers")]
    fn headerless_input_yields_defaults(#[case] input: &str) {
        assert_eq!(RasterHeader::default(), HeaderParser::parse(input));
    }

    #[rstest]
    #[case("NCOLS 4 NROWS 2")]
    #[case("NCols 4 nRows 2")]
    fn keys_match_case_insensitively(#[case] input: &str) {
        let header = HeaderParser::parse(input);

        assert_eq!(4, header.ncols);
        assert_eq!(2, header.nrows);
    }

    #[test]
    fn fractional_dimensions_are_truncated() {
        let header = HeaderParser::parse("ncols 4.9 nrows 2.1");

        assert_eq!(4, header.ncols);
        assert_eq!(2, header.nrows);
    }
}

/// Geolocation and shape metadata of one raster run, as read from the
/// plain-text `.hdr` companion file.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct RasterHeader {
    pub ncols: usize,
    pub nrows: usize,
    pub xllcorner: f64,
    pub yllcorner: f64,
    pub cellsize: f64,
    /// the magic value used for "unknown value in this cell"
    pub nodata: f32,
}

impl Default for RasterHeader {
    fn default() -> Self {
        RasterHeader {
            ncols: 0,
            nrows: 0,
            xllcorner: 0.0,
            yllcorner: 0.0,
            cellsize: 0.0,
            nodata: -9999.0,
        }
    }
}

#[derive(Debug)]
pub struct HeaderParser {}

impl HeaderParser {
    fn key_value(input: &str) -> IResult<&str, (&str, f64)> {
        preceded(
            multispace0,
            separated_pair(
                take_till1(|c: char| c.is_whitespace()),
                multispace1,
                double,
            ),
        )(input)
    }

    /// Fold whitespace-separated `key value` pairs into a header.
    ///
    /// Keys match case-insensitively; unrecognized keys are skipped, the
    /// last value wins for duplicates, and keys absent from the input leave
    /// their defaults on the struct. Parsing stops at the first token pair
    /// that is not `identifier number`, so trailing non-numeric content
    /// (e.g. a `byteorder LSBFIRST` line) ends the scan without an error.
    ///
    /// Callers must check that `ncols`/`nrows` are positive before sizing
    /// grids off the result.
    pub fn parse(input: &str) -> RasterHeader {
        let mut header = RasterHeader::default();
        let mut rest = input;

        while let Ok((remaining, (key, value))) = HeaderParser::key_value(rest) {
            rest = remaining;

            if key.eq_ignore_ascii_case("ncols") {
                header.ncols = value as usize;
            } else if key.eq_ignore_ascii_case("nrows") {
                header.nrows = value as usize;
            } else if key.eq_ignore_ascii_case("xllcorner") {
                header.xllcorner = value;
            } else if key.eq_ignore_ascii_case("yllcorner") {
                header.yllcorner = value;
            } else if key.eq_ignore_ascii_case("cellsize") {
                header.cellsize = value;
            } else if key.eq_ignore_ascii_case("nodata_value") {
                header.nodata = value as f32;
            }
        }

        header
    }

    pub fn from_file(path: &Path) -> anyhow::Result<RasterHeader> {
        let text = std::fs::read_to_string(path)?;

        Ok(HeaderParser::parse(&text))
    }
}
