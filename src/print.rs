use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

/// Lays out one header row of threshold labels and one row per dice pool, each cell the
/// percentage chance of that pool meeting the threshold.
pub fn tabulate_chances(thresholds: &[String], pools: &[(String, Vec<f64>)]) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(6)).with(HAlign::Centred),
            )];
            for _ in thresholds {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(12)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Dice".into()];
            for threshold in thresholds {
                header_cells.push(threshold.clone().into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for (pool, chances) in pools {
        let mut row_cells = vec![pool.clone().into()];
        for chance in chances {
            row_cells.push(format!("{chance:.2}%").into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}
