use super::game::Game;

/// Outcome of resolving what the moderator typed to a player name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Empty input: no target, skip or abstain.
    Nobody,
    Found(String),
    Ambiguous(Vec<String>),
    NotFound,
}

/// Exact name first, then the same ignoring case, then a prefix shared by
/// exactly one player. Names differing only by case need the exact spelling.
pub fn lookup(game: &Game, input: &str) -> Lookup {
    let typed = input.trim();
    if typed.is_empty() {
        return Lookup::Nobody;
    }
    if game.players.contains_key(typed) {
        return Lookup::Found(typed.to_string());
    }

    let input = typed.to_lowercase();
    let mut same: Vec<String> = game
        .players
        .keys()
        .filter(|name| name.to_lowercase() == input)
        .cloned()
        .collect();
    match same.len() {
        0 => {}
        1 => return Lookup::Found(same.remove(0)),
        _ => return Lookup::Ambiguous(same),
    }

    let mut matches: Vec<String> = game
        .players
        .keys()
        .filter(|name| name.to_lowercase().starts_with(&input))
        .cloned()
        .collect();

    match matches.len() {
        0 => Lookup::NotFound,
        1 => Lookup::Found(matches.remove(0)),
        _ => Lookup::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{
        game::tests::sample_game,
        person::{roles::Role, Person},
    };

    #[test]
    fn resolves_exact_and_prefix() {
        let game = sample_game();
        assert_eq!(lookup(&game, "bob"), Lookup::Found("bob".to_string()));
        assert_eq!(lookup(&game, "  CA "), Lookup::Found("carol".to_string()));
        assert_eq!(lookup(&game, ""), Lookup::Nobody);
        assert_eq!(lookup(&game, "zed"), Lookup::NotFound);
    }

    #[test]
    fn ambiguous_prefix_lists_candidates() {
        let mut game = sample_game();
        let anna = Person::new("anna", Some(Role::Traitor));
        game.players.insert(anna.name.clone(), anna);

        assert_eq!(
            lookup(&game, "a"),
            Lookup::Ambiguous(vec!["alice".to_string(), "anna".to_string()])
        );
        assert_eq!(lookup(&game, "an"), Lookup::Found("anna".to_string()));
    }

    #[test]
    fn exact_name_beats_longer_names() {
        let mut game = sample_game();
        let al = Person::new("al", Some(Role::Traitor));
        game.players.insert(al.name.clone(), al);

        assert_eq!(lookup(&game, "al"), Lookup::Found("al".to_string()));
        assert_eq!(lookup(&game, "ali"), Lookup::Found("alice".to_string()));
    }

    #[test]
    fn names_differing_by_case_need_exact_spelling() {
        let mut game = sample_game();
        let upper = Person::new("Bob", Some(Role::Traitor));
        game.players.insert(upper.name.clone(), upper);

        assert_eq!(lookup(&game, "bob"), Lookup::Found("bob".to_string()));
        assert_eq!(lookup(&game, "Bob"), Lookup::Found("Bob".to_string()));
        assert_eq!(
            lookup(&game, "BOB"),
            Lookup::Ambiguous(vec!["Bob".to_string(), "bob".to_string()])
        );
    }
}
