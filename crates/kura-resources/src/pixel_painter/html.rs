//! HTML pages: the grid reference page and the run-length encodings page.

use image::Rgb;
use maud::html;

/// The grid reference page: assembly instructions, the page reference
/// table, and the pixel legend for the chosen method.
#[must_use]
pub fn grid_reference_page(
    grid: &[Vec<String>],
    image_label: &str,
    legend: &[(Rgb<u8>, &'static str)],
) -> String {
    html! {
        style { "#grid-table td {border:1px solid black;padding:1rem 0.5rem;}" }
        style { "#pixel-legend td {border:1px solid black;padding:0.5rem 0.5rem;}" }
        h1 { "Pixel Painter" }
        h2 { "Page grid reference for " (image_label) " image" }
        p {
            "Once pixels on each page are filled in correctly, cut each grid out "
            "and arrange in the following layout (page names are in the top "
            "right corner)."
        }
        table #grid-table {
            tbody {
                @for row in grid {
                    tr {
                        @for reference in row {
                            td { (reference) }
                        }
                    }
                }
            }
        }
        h2 { "Pixel legend" }
        table #pixel-legend style="padding-top:1rem;" {
            tbody {
                @for entry in legend {
                    tr {
                        td style=(swatch_style(entry.0)) { " " }
                        td { (entry.1) }
                    }
                }
            }
        }
    }
    .into_string()
}

fn swatch_style(value: Rgb<u8>) -> String {
    format!(
        "background-color:rgb({},{},{});width:3em;",
        value[0], value[1], value[2]
    )
}

/// The run-length encodings page: one block per page reference, one line of
/// comma-separated run lengths per pixel row.
#[must_use]
pub fn run_length_encoding_page(encodings: &[(String, Vec<Vec<u32>>)]) -> String {
    html! {
        h1 { "Run Length Encodings" }
        @for (reference, rows) in encodings {
            div .page-break {
                h2 { "Encoding for page " (reference) }
                ul .list-unstyled {
                    @for row in rows {
                        li { (join_counts(row)) }
                    }
                }
            }
        }
    }
    .into_string()
}

fn join_counts(row: &[u32]) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_reference_page_lists_references_and_legend() {
        let grid = vec![
            vec!["0A1".to_string(), "0A2".to_string()],
            vec!["0B1".to_string(), "0B2".to_string()],
        ];
        let legend = [(Rgb([255, 255, 255]), "0"), (Rgb([0, 0, 0]), "1")];

        let page = grid_reference_page(&grid, "fish", &legend);
        assert!(page.contains("<h1>Pixel Painter</h1>"));
        assert!(page.contains("Page grid reference for fish image"));
        for reference in ["0A1", "0A2", "0B1", "0B2"] {
            assert!(page.contains(&format!("<td>{reference}</td>")), "{reference}");
        }
        assert!(page.contains("background-color:rgb(255,255,255);width:3em;"));
        assert!(page.contains("background-color:rgb(0,0,0);width:3em;"));
    }

    #[test]
    fn encoding_page_joins_runs_with_commas() {
        let encodings = vec![(
            "0A1".to_string(),
            vec![vec![3, 1], vec![0, 4]],
        )];

        let page = run_length_encoding_page(&encodings);
        assert!(page.contains("<h1>Run Length Encodings</h1>"));
        assert!(page.contains("Encoding for page 0A1"));
        assert!(page.contains("<li>3, 1</li>"));
        assert!(page.contains("<li>0, 4</li>"));
    }

    #[test]
    fn encoding_page_keeps_grid_order() {
        let encodings = vec![
            ("0A1".to_string(), vec![vec![1]]),
            ("0A2".to_string(), vec![vec![1]]),
            ("0B1".to_string(), vec![vec![1]]),
        ];
        let page = run_length_encoding_page(&encodings);
        let a1 = page.find("0A1").unwrap();
        let a2 = page.find("0A2").unwrap();
        let b1 = page.find("0B1").unwrap();
        assert!(a1 < a2 && a2 < b1);
    }
}
