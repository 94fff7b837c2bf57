//! Startup checks of a variant configuration against a loaded table.

use demog_ingest::Table;
use demog_model::{PrimaryAxisSource, VariantSpec};

use crate::error::{DatasetError, Result};

/// Primary-axis labels for `spec`, checked against the table height.
pub fn resolve_primary_axis(spec: &VariantSpec, table: &Table) -> Result<Vec<String>> {
    let labels = match &spec.primary_axis {
        PrimaryAxisSource::Fixed(labels) => labels.clone(),
        PrimaryAxisSource::LabelColumn(column) => {
            if !table.has_column(column) {
                return Err(DatasetError::MissingLabelColumn {
                    variant: spec.variant,
                    column: (*column).to_string(),
                });
            }
            table.labels(column)?
        }
    };
    if labels.len() != table.height() {
        return Err(DatasetError::LengthMismatch {
            variant: spec.variant,
            expected: labels.len(),
            actual: table.height(),
        });
    }
    Ok(labels)
}

/// Check that every whitelisted key resolves to numeric columns of the table.
pub fn validate_columns(spec: &VariantSpec, table: &Table) -> Result<()> {
    for key in spec.categories {
        let resolved = spec.column_rule.resolve(key);
        for column in resolved.required() {
            if !table.has_column(column) {
                return Err(DatasetError::MissingColumn {
                    variant: spec.variant,
                    key: (*key).to_string(),
                    column: column.to_string(),
                });
            }
            table.numeric(column)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use demog_ingest::ColumnData;
    use demog_model::Variant;

    fn staff_like(height: usize) -> Table {
        let values = vec![1.0; height];
        Table::from_columns([
            ("Hire male", values.clone()),
            ("Hire female", values.clone()),
            ("Left male", values.clone()),
            ("Left female", values),
        ])
        .unwrap()
    }

    #[test]
    fn test_fixed_axis_length_checked() {
        let spec = Variant::ResearchStaff.spec();
        assert_eq!(resolve_primary_axis(&spec, &staff_like(38)).unwrap().len(), 38);
        let err = resolve_primary_axis(&spec, &staff_like(37)).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                expected: 38,
                actual: 37,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_column_named() {
        let spec = Variant::ResearchStaff.spec();
        let table = Table::from_columns([("Hire male", vec![1.0]), ("Hire female", vec![1.0])])
            .unwrap();
        let err = validate_columns(&spec, &table).unwrap_err();
        match err {
            DatasetError::MissingColumn { key, column, .. } => {
                assert_eq!(key, "Left");
                assert_eq!(column, "Left male");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_label_column_axis() {
        let spec = Variant::Symposium.spec();
        let table = Table::from_columns([(
            "Symposium",
            ColumnData::from(vec!["Spring 2017", "Fall 2017"]),
        )])
        .unwrap();
        assert_eq!(
            resolve_primary_axis(&spec, &table).unwrap(),
            vec!["Spring 2017", "Fall 2017"]
        );
    }

    #[test]
    fn test_missing_label_column() {
        let spec = Variant::Symposium.spec();
        let table = Table::from_columns([("participants", vec![1.0])]).unwrap();
        assert!(matches!(
            resolve_primary_axis(&spec, &table),
            Err(DatasetError::MissingLabelColumn { .. })
        ));
    }

    #[test]
    fn test_text_column_rejected_for_counts() {
        let spec = Variant::RenewalPromotion.spec();
        let mut columns: Vec<(String, ColumnData)> = Vec::new();
        for key in spec.categories {
            columns.push((format!("{key} Male"), ColumnData::from(vec!["n/a"])));
            columns.push((format!("{key} Female"), ColumnData::from(vec![1.0])));
        }
        let table = Table::from_columns(columns).unwrap();
        assert!(matches!(
            validate_columns(&spec, &table),
            Err(DatasetError::Ingest(_))
        ));
    }
}
