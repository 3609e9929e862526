use comfy_table::{ContentArrangement, Table};

use swd_dice::DieKind;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Codes", "Sides", "Faces"]);

    for kind in DieKind::ALL {
        let faces: Vec<&str> = kind
            .faces()
            .iter()
            .map(|f| if f.is_blank() { "-" } else { f.label() })
            .collect();
        table.add_row(vec![
            kind.to_string(),
            kind.aliases().join(", "),
            kind.faces().len().to_string(),
            faces.join(" "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Example: swd roll 2ca,2pe,3di,1be,2co");

    Ok(())
}
