//! CSV-backed column tables.
//!
//! Identifier columns stay strings no matter how numeric they look:
//! census GEOIDs silently lose leading zeros when read as integers.

use std::io::Read;

use prep_common::{PrepError, PrepResult};

/// An in-memory CSV table, column-oriented, all cells kept as text.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl Table {
    /// Read a headered CSV.
    pub fn from_reader(reader: impl Read) -> PrepResult<Table> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| PrepError::TabularError(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record.map_err(|e| PrepError::TabularError(e.to_string()))?;
            if record.len() != headers.len() {
                return Err(PrepError::TabularError(format!(
                    "row with {} cells in a {}-column table",
                    record.len(),
                    headers.len()
                )));
            }
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                column.push(cell.to_string());
            }
        }
        Ok(Table { headers, columns })
    }

    pub fn from_str(text: &str) -> PrepResult<Table> {
        Self::from_reader(text.as_bytes())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A column's raw text cells.
    pub fn column(&self, name: &str) -> PrepResult<&[String]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| PrepError::TabularError(format!("no column '{}'", name)))
    }

    /// A column parsed as floats; blank cells become NaN.
    pub fn float_column(&self, name: &str) -> PrepResult<Vec<f64>> {
        self.column(name)?
            .iter()
            .map(|cell| {
                if cell.trim().is_empty() {
                    Ok(f64::NAN)
                } else {
                    cell.trim().parse::<f64>().map_err(|_| {
                        PrepError::TabularError(format!(
                            "cannot parse '{}' in column '{}' as a number",
                            cell, name
                        ))
                    })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geoid_stays_text() {
        let table = Table::from_str("GEOID,value\n06037101110,1.5\n06001400100,2.0\n").unwrap();
        // Leading zero intact.
        assert_eq!(table.column("GEOID").unwrap()[0], "06037101110");
        assert_eq!(table.float_column("value").unwrap(), vec![1.5, 2.0]);
    }

    #[test]
    fn test_blank_cell_is_nan() {
        let table = Table::from_str("GEOID,value\na,\nb,3.0\n").unwrap();
        let values = table.float_column("value").unwrap();
        assert!(values[0].is_nan());
        assert_eq!(values[1], 3.0);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let table = Table::from_str("a,b\n1,2\n").unwrap();
        assert!(table.column("c").is_err());
    }

    #[test]
    fn test_unparseable_number_is_fatal() {
        let table = Table::from_str("value\nnot-a-number\n").unwrap();
        assert!(table.float_column("value").is_err());
    }
}
