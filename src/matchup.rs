#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

/// Parse `"Home | Away"`, or `"Home Away Words"` where the first word is home.
pub fn parse_matchup(body: &str) -> Option<Matchup> {
    let (home, away) = if let Some((h, a)) = body.split_once('|') {
        (h.trim().to_string(), a.trim().to_string())
    } else {
        let mut words = body.split_whitespace();
        let home = words.next()?.to_string();
        (home, words.collect::<Vec<_>>().join(" "))
    };
    if home.is_empty() || away.is_empty() {
        return None;
    }
    Some(Matchup { home, away })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_separates_multi_word_names() {
        let m = parse_matchup("  Sporting CP |  Real Madrid ").unwrap();
        assert_eq!(m.home, "Sporting CP");
        assert_eq!(m.away, "Real Madrid");
    }

    #[test]
    fn only_first_pipe_splits() {
        let m = parse_matchup("A | B | C").unwrap();
        assert_eq!(m.home, "A");
        assert_eq!(m.away, "B | C");
    }

    #[test]
    fn first_word_is_home_without_pipe() {
        let m = parse_matchup("Benfica Manchester   United").unwrap();
        assert_eq!(m.home, "Benfica");
        assert_eq!(m.away, "Manchester United");
    }

    #[test]
    fn incomplete_queries_are_rejected() {
        assert!(parse_matchup("").is_none());
        assert!(parse_matchup("Benfica").is_none());
        assert!(parse_matchup("Benfica |").is_none());
        assert!(parse_matchup(" | Porto").is_none());
    }
}
