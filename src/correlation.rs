use crate::covid::VariableTable;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CorrelationMatrix {
    pub(crate) labels: Vec<String>,
    pub(crate) values: Vec<Vec<Option<f64>>>,
}

/// Pearson correlation coefficient of two equally long series.
///
/// Undefined (`None`) for mismatched lengths, fewer than two samples, or a
/// series with zero variance.
pub(crate) fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

pub(crate) fn correlation_matrix(table: &VariableTable) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = (0..table.columns.len()).map(|i| table.column(i)).collect();
    let values = columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect();
    CorrelationMatrix {
        labels: table.columns.iter().map(|c| c.to_string()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COUNTRY_DATA;
    use crate::covid::CountryRow;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perfect_positive_and_negative() {
        assert!(close(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap(), 1.0));
        assert!(close(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap(), -1.0));
    }

    #[test]
    fn undefined_cases() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let matrix = correlation_matrix(&COUNTRY_DATA);
        assert_eq!(matrix.labels.len(), 4);
        for i in 0..4 {
            assert!(close(matrix.values[i][i].unwrap(), 1.0));
            for j in 0..4 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
        // cases fall steadily while active barely moves: cases vs active is positive
        assert!(matrix.values[0][3].unwrap() > 0.0);
    }

    #[test]
    fn constant_column_yields_undefined_cells() {
        let table = VariableTable {
            columns: ["a", "b", "c", "d"],
            rows: vec![
                CountryRow { country: "x", values: [1, 7, 3, 1] },
                CountryRow { country: "y", values: [2, 7, 1, 5] },
                CountryRow { country: "z", values: [3, 7, 2, 2] },
            ],
        };
        let matrix = correlation_matrix(&table);
        assert!(matrix.values[1].iter().all(Option::is_none));
        assert!(matrix.values[0][0].is_some());
    }
}
