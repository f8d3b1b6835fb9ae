use comfy_table::{ContentArrangement, Table};

use wk_core::CUBE_FACES;
use wk_motion::rest_orientation;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "X", "Y", "Transform"]);

    for face in 1..=CUBE_FACES {
        let rest = rest_orientation(face).map_err(|e| e.to_string())?;
        table.add_row(vec![
            face.to_string(),
            format!("{}", rest.x),
            format!("{}", rest.y),
            rest.css_transform(),
        ]);
    }

    println!("{table}");
    Ok(())
}
