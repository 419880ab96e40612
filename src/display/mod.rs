// Table rendering for the matrix types.
use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use nalgebra::{DMatrix, Scalar};

use crate::matrix::{AngleMatrix, CorrelationMatrix, FactorMatrix};

fn render<F>(title: &str, matrix: &DMatrix<F>) -> String
where
    F: Scalar + Display,
{
    let mut title_table = Table::new();
    title_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .add_row(vec![Cell::new(title).set_alignment(CellAlignment::Center)]);

    let mut header = vec![Cell::new("").set_alignment(CellAlignment::Center)];
    header.extend(
        (0..matrix.ncols()).map(|j| Cell::new(j).set_alignment(CellAlignment::Center)),
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (i, row) in matrix.row_iter().enumerate() {
        let mut cells = vec![Cell::new(i).set_alignment(CellAlignment::Center)];
        cells.extend(
            row.iter()
                .map(|x| Cell::new(format!("{:+.6}", x)).set_alignment(CellAlignment::Right)),
        );
        table.add_row(cells);
    }

    format!("{}\n{}", title_table, table)
}

impl<F: Scalar + Display> AngleMatrix<F> {
    /// Render as a table.
    pub fn display(&self) -> String {
        render("Angle matrix Θ", self.matrix())
    }
}

impl<F: Scalar + Display> FactorMatrix<F> {
    /// Render as a table.
    pub fn display(&self) -> String {
        render("Factor X", self.matrix())
    }
}

impl<F: Scalar + Display> CorrelationMatrix<F> {
    /// Render as a table.
    pub fn display(&self) -> String {
        render("Correlation matrix R = XXᵀ", self.matrix())
    }
}

impl<F: Scalar + Display> Display for AngleMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl<F: Scalar + Display> Display for FactorMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl<F: Scalar + Display> Display for CorrelationMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
