use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

use crate::facets::Facets;
use crate::filter::ALL;
use crate::view::Event;

pub const USAGE: &str = "\
Usage:
  search <text>     filter by name or cuisine (empty clears)
  rating <n>        minimum rating, e.g. 4.5 (0 for all)
  cuisine <name>    pick a cuisine, `all` for every cuisine
  price <token>     pick a price tier, e.g. $$ or `all`
  clear             reset rating, cuisine and price
  list              print the current results
  facets            print the selector options
  help              show this message
  quit              leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Apply(Event),
    List,
    Facets,
    Help,
    Quit,
}

impl Action {
    // I need:
    //  <cmd> [argument with spaces]
    pub fn new(line: &str) -> Result<Self, &'static str> {
        let line = line.trim_start();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest),
            None => (line.trim_end(), ""),
        };

        match cmd {
            "search" | "/" => Ok(Self::Apply(Event::Search(rest.to_string()))),
            "rating" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    return Err("too less argument");
                }
                let Ok(rating) = arg.parse() else {
                    return Err("Can not parse your argument into number");
                };
                Ok(Self::Apply(Event::MinRating(rating)))
            }
            "cuisine" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    Err("too less argument")
                } else {
                    Ok(Self::Apply(Event::Cuisine(arg.to_string())))
                }
            }
            "price" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    Err("too less argument")
                } else {
                    Ok(Self::Apply(Event::PriceRange(arg.to_string())))
                }
            }
            "clear" => Ok(Self::Apply(Event::ClearFilters)),
            "list" | "" => Ok(Self::List),
            "facets" => Ok(Self::Facets),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err("unexpected action"),
        }
    }

    /// Snap cuisine input onto one of the offered options, the way a drop-down would.
    ///
    /// Price tokens are only ever taken verbatim.
    pub fn resolve(self, facets: &Facets) -> Self {
        match self {
            Self::Apply(Event::Cuisine(input)) => {
                Self::Apply(Event::Cuisine(pick_option(&facets.cuisines, input)))
            }
            other => other,
        }
    }
}

/// Shorter input is taken verbatim rather than guessed at.
const MIN_FUZZY_INPUT: usize = 3;

fn pick_option(options: &[String], input: String) -> String {
    if input == ALL || options.iter().any(|option| *option == input) {
        return input;
    }
    if input.chars().count() < MIN_FUZZY_INPUT {
        tracing::warn!("no option is {input:?}, the listing will be empty");
        return input;
    }

    let matcher = SkimMatcherV2::default();
    let best = options
        .iter()
        .filter(|option| option.as_str() != ALL)
        .filter_map(|option| {
            let (score, indices) = matcher.fuzzy_indices(option, &input)?;
            // only a contiguous run counts
            let contiguous = indices.windows(2).all(|pair| pair[1] == pair[0] + 1);
            contiguous.then_some((score, option))
        })
        // ties keep the earlier option
        .fold(None, |best: Option<(i64, &String)>, (score, option)| match best {
            Some((top, _)) if top >= score => best,
            _ => Some((score, option)),
        });

    match best {
        Some((_, option)) => {
            tracing::debug!("resolved selector input {input:?} to {option:?}");
            option.clone()
        }
        None => {
            tracing::warn!("no option matches {input:?}, the listing will be empty");
            input
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_restaurants;
    use crate::view::ListingView;

    fn facets() -> Facets {
        Facets::of(&sample_restaurants())
    }

    #[test]
    fn parse_search_keeps_spaces() {
        assert_eq!(
            Action::new("search dar el"),
            Ok(Action::Apply(Event::Search("dar el".to_string())))
        );
        assert_eq!(
            Action::new("search"),
            Ok(Action::Apply(Event::Search(String::new())))
        );
        assert_eq!(
            Action::new("/ boho"),
            Ok(Action::Apply(Event::Search("boho".to_string())))
        );
    }

    #[test]
    fn parse_rating() {
        assert_eq!(
            Action::new("rating 4.5"),
            Ok(Action::Apply(Event::MinRating(4.5)))
        );
        assert_eq!(
            Action::new("rating abc"),
            Err("Can not parse your argument into number")
        );
        assert_eq!(Action::new("rating"), Err("too less argument"));
    }

    #[test]
    fn parse_misc() {
        assert_eq!(Action::new("clear"), Ok(Action::Apply(Event::ClearFilters)));
        assert_eq!(Action::new(""), Ok(Action::List));
        assert_eq!(Action::new("quit\n"), Ok(Action::Quit));
        assert_eq!(Action::new("cuisine"), Err("too less argument"));
        assert_eq!(Action::new("order pizza"), Err("unexpected action"));
    }

    #[test]
    fn exact_option_wins() {
        let action = Action::new("cuisine Middle Eastern").unwrap().resolve(&facets());
        assert_eq!(
            action,
            Action::Apply(Event::Cuisine("Middle Eastern".to_string()))
        );
        let action = Action::new("price $$").unwrap().resolve(&facets());
        assert_eq!(action, Action::Apply(Event::PriceRange("$$".to_string())));
        let action = Action::new("cuisine all").unwrap().resolve(&facets());
        assert_eq!(action, Action::Apply(Event::Cuisine("all".to_string())));
    }

    #[test]
    fn price_is_never_guessed() {
        let mut view = ListingView::new(sample_restaurants());
        let action = Action::new("price $").unwrap().resolve(view.facets());
        assert_eq!(action, Action::Apply(Event::PriceRange("$".to_string())));

        let Action::Apply(event) = action else { panic!("expected an event") };
        view.apply(event);
        assert_eq!(view.count(), 0);
    }

    #[test]
    fn short_or_scattered_cuisine_is_not_guessed() {
        for input in ["a", "l", "mar"] {
            let mut view = ListingView::new(sample_restaurants());
            let action = Action::new(&format!("cuisine {input}"))
                .unwrap()
                .resolve(view.facets());
            assert_eq!(action, Action::Apply(Event::Cuisine(input.to_string())));

            let Action::Apply(event) = action else { panic!("expected an event") };
            view.apply(event);
            assert_eq!(view.count(), 0, "cuisine {input}");
        }
    }

    #[test]
    fn fuzzy_option() {
        let action = Action::new("cuisine moroc").unwrap().resolve(&facets());
        assert_eq!(action, Action::Apply(Event::Cuisine("Moroccan".to_string())));
    }

    #[test]
    fn unknown_option_passes_through() {
        let action = Action::new("cuisine Sushi").unwrap().resolve(&facets());
        assert_eq!(action, Action::Apply(Event::Cuisine("Sushi".to_string())));
    }
}
