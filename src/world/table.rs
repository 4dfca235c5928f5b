use super::game::Game;

const HEADERS: [&str; 7] = ["name", "role", "mutant", "genome", "dead", "paralyzed", "spied"];

fn rows(game: &Game) -> Vec<[String; 7]> {
    game.players
        .values()
        .map(|p| {
            let spied: Vec<&str> = p
                .spied
                .fields()
                .into_iter()
                .filter(|(_, set)| *set)
                .map(|(field, _)| field)
                .collect();

            [
                p.name.clone(),
                p.role_name().to_string(),
                p.mutant.to_string(),
                p.genome.to_string(),
                p.dead.to_string(),
                p.paralyzed.to_string(),
                spied.join(","),
            ]
        })
        .collect()
}

/// Moderator view of every player, chief line first.
pub fn render(game: &Game) -> String {
    let rows = rows(game);

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = match game.chief() {
        Some(chief) => format!("Chief: {}\n", chief.name),
        None => "No chief\n".to_string(),
    };

    out.push_str(&line(&HEADERS));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(&rule.iter().map(String::as_str).collect::<Vec<_>>()));
    out.push('\n');

    for row in &rows {
        out.push_str(&line(&row.iter().map(String::as_str).collect::<Vec<_>>()));
        out.push('\n');
    }

    out
}
