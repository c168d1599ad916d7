use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::GameEntity;

/// How a guessed attribute relates to the target's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The attributes are equal (ignoring case and, for lists, order).
    Exact,
    /// The list attributes intersect without being equal.
    Partial,
    /// The guessed year is greater than the target's.
    Higher,
    /// The guessed year is less than the target's.
    Lower,
    /// No match, or the guessed side of the comparison is missing.
    None,
}

/// Outcome of comparing a guessed game against the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Whether the guessed title matches the target's, case-insensitive.
    pub correct: bool,
    /// Per-attribute verdicts, in the order clients display them.
    pub fields: IndexMap<&'static str, Verdict>,
}

/// Case-insensitive equality on trimmed titles and labels.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Compare a target game against a guess, producing a verdict per attribute.
///
/// `guess` is `None` when the guessed title did not resolve to a catalog
/// entry; every attribute that depends on the guessed game then reports
/// [`Verdict::None`] instead of failing the request. `guessed_year` lets the
/// caller supply a release year explicitly; when absent the resolved guessed
/// game's year is used.
pub fn compare_games(
    target: &GameEntity,
    guess: Option<&GameEntity>,
    guessed_year: Option<i32>,
) -> Comparison {
    let year = guessed_year.or_else(|| guess.map(|game| game.release_year));

    let mut fields = IndexMap::new();
    fields.insert("ReleaseYear", year_verdict(target.release_year, year));
    fields.insert(
        "Genre",
        text_verdict(&target.genre, guess.map(|game| game.genre.as_str())),
    );
    fields.insert(
        "Platforms",
        list_verdict(&target.platforms, guess.map(|game| game.platforms.as_slice())),
    );
    fields.insert(
        "Developer",
        text_verdict(&target.developer, guess.map(|game| game.developer.as_str())),
    );
    fields.insert(
        "Publisher",
        text_verdict(&target.publisher, guess.map(|game| game.publisher.as_str())),
    );
    fields.insert(
        "Budget",
        text_verdict(&target.budget, guess.map(|game| game.budget.as_str())),
    );
    fields.insert(
        "Saga",
        text_verdict(&target.saga, guess.map(|game| game.saga.as_str())),
    );
    fields.insert(
        "POV",
        text_verdict(&target.pov, guess.map(|game| game.pov.as_str())),
    );

    let correct = guess.is_some_and(|game| eq_ignore_case(&game.name, &target.name));

    Comparison { correct, fields }
}

fn text_verdict(target: &str, guess: Option<&str>) -> Verdict {
    match guess {
        Some(value) if eq_ignore_case(target, value) => Verdict::Exact,
        _ => Verdict::None,
    }
}

fn list_verdict(target: &[String], guess: Option<&[String]>) -> Verdict {
    let Some(guess) = guess else {
        return Verdict::None;
    };

    let target: HashSet<String> = target.iter().map(|item| item.trim().to_lowercase()).collect();
    let guess: HashSet<String> = guess.iter().map(|item| item.trim().to_lowercase()).collect();

    if target == guess {
        Verdict::Exact
    } else if target.intersection(&guess).next().is_some() {
        Verdict::Partial
    } else {
        Verdict::None
    }
}

fn year_verdict(target: i32, guess: Option<i32>) -> Verdict {
    match guess {
        Some(year) if year == target => Verdict::Exact,
        Some(year) if year > target => Verdict::Higher,
        Some(_) => Verdict::Lower,
        None => Verdict::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn game(name: &str) -> GameEntity {
        GameEntity {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            genre: "Metroidvania".to_owned(),
            platforms: vec!["PC".to_owned(), "Switch".to_owned()],
            release_year: 2010,
            developer: "Team Cherry".to_owned(),
            publisher: "Team Cherry".to_owned(),
            budget: "indie".to_owned(),
            saga: "Hollow Knight".to_owned(),
            pov: "side-scrolling".to_owned(),
            description: "A bug knight explores a fallen kingdom.".to_owned(),
            keywords: vec!["bugs".to_owned(), "nail".to_owned()],
            clues: vec!["Clue one".to_owned(), "Clue two".to_owned()],
            cover_image_url: None,
        }
    }

    #[test]
    fn game_against_itself_is_exact_everywhere() {
        let target = game("Hollow Knight");
        let result = compare_games(&target, Some(&target), None);

        assert!(result.correct);
        for (field, verdict) in &result.fields {
            assert_eq!(*verdict, Verdict::Exact, "field {field}");
        }
    }

    #[test]
    fn correctness_ignores_title_case() {
        let target = game("Hollow Knight");
        let guess = game("hollow knight");
        assert!(compare_games(&target, Some(&guess), None).correct);
    }

    #[test]
    fn platform_comparison_ignores_order() {
        let target = game("Hollow Knight");
        let mut guess = game("Celeste");
        guess.platforms = vec!["Switch".to_owned(), "PC".to_owned()];

        let result = compare_games(&target, Some(&guess), None);
        assert_eq!(result.fields["Platforms"], Verdict::Exact);
    }

    #[test]
    fn overlapping_platforms_are_partial() {
        let mut target = game("Hollow Knight");
        target.platforms = vec!["PC".to_owned(), "PS5".to_owned()];
        let mut guess = game("Celeste");
        guess.platforms = vec!["PC".to_owned(), "Xbox".to_owned()];

        let result = compare_games(&target, Some(&guess), None);
        assert_eq!(result.fields["Platforms"], Verdict::Partial);
    }

    #[test]
    fn disjoint_platforms_are_none() {
        let mut guess = game("Celeste");
        guess.platforms = vec!["Mega Drive".to_owned()];

        let result = compare_games(&game("Hollow Knight"), Some(&guess), None);
        assert_eq!(result.fields["Platforms"], Verdict::None);
    }

    #[test]
    fn release_year_verdicts() {
        let target = game("Hollow Knight");
        let guess = game("Celeste");

        let higher = compare_games(&target, Some(&guess), Some(2015));
        assert_eq!(higher.fields["ReleaseYear"], Verdict::Higher);

        let lower = compare_games(&target, Some(&guess), Some(2005));
        assert_eq!(lower.fields["ReleaseYear"], Verdict::Lower);

        let exact = compare_games(&target, Some(&guess), Some(2010));
        assert_eq!(exact.fields["ReleaseYear"], Verdict::Exact);

        let missing = compare_games(&target, None, None);
        assert_eq!(missing.fields["ReleaseYear"], Verdict::None);
    }

    #[test]
    fn explicit_year_takes_priority_over_resolved_game() {
        let target = game("Hollow Knight");
        let guess = game("Celeste");

        let result = compare_games(&target, Some(&guess), Some(2017));
        assert_eq!(result.fields["ReleaseYear"], Verdict::Higher);
    }

    #[test]
    fn unresolved_guess_reports_none_everywhere() {
        let target = game("Hollow Knight");
        let result = compare_games(&target, None, None);

        assert!(!result.correct);
        for (field, verdict) in &result.fields {
            assert_eq!(*verdict, Verdict::None, "field {field}");
        }
    }

    #[test]
    fn mismatched_text_fields_are_none() {
        let target = game("Hollow Knight");
        let mut guess = game("Celeste");
        guess.genre = "Platformer".to_owned();
        guess.developer = "Extremely OK Games".to_owned();

        let result = compare_games(&target, Some(&guess), None);
        assert_eq!(result.fields["Genre"], Verdict::None);
        assert_eq!(result.fields["Developer"], Verdict::None);
        assert!(!result.correct);
    }
}
