//! Command words and their usage text.

/// Every command the league understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    AddPlayer,
    AddFast,
    DeletePlayer,
    ViewPlayer,
    ViewAllPlayer,
    FindPlayer,
    ListPlayers,
    ClearPlayers,
    AddTeam,
    DeleteTeam,
    ViewTeam,
    FindTeam,
    ListTeams,
    ClearTeams,
    AddMatch,
    DeleteMatch,
    ListMatches,
    ClearMatches,
    Help,
    Exit,
}

impl Verb {
    /// Help listing order.
    pub const ALL: [Verb; 20] = [
        Verb::AddPlayer,
        Verb::AddFast,
        Verb::DeletePlayer,
        Verb::ViewPlayer,
        Verb::ViewAllPlayer,
        Verb::FindPlayer,
        Verb::ListPlayers,
        Verb::ClearPlayers,
        Verb::AddTeam,
        Verb::DeleteTeam,
        Verb::ViewTeam,
        Verb::FindTeam,
        Verb::ListTeams,
        Verb::ClearTeams,
        Verb::AddMatch,
        Verb::DeleteMatch,
        Verb::ListMatches,
        Verb::ClearMatches,
        Verb::Help,
        Verb::Exit,
    ];

    /// Looks up a case-sensitive command word, aliases included.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.words().iter().any(|candidate| *candidate == word))
    }

    /// Accepted command words; the first is canonical.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Self::AddPlayer => &["addPlayer", "add"],
            Self::AddFast => &["addFast"],
            Self::DeletePlayer => &["deletePlayer", "delete"],
            Self::ViewPlayer => &["view"],
            Self::ViewAllPlayer => &["displayProfile", "viewAll"],
            Self::FindPlayer => &["findPlayer", "find"],
            Self::ListPlayers => &["listPlayer", "list"],
            Self::ClearPlayers => &["clearPlayer", "clear"],
            Self::AddTeam => &["addTeam"],
            Self::DeleteTeam => &["deleteTeam"],
            Self::ViewTeam => &["viewTeam"],
            Self::FindTeam => &["findTeam"],
            Self::ListTeams => &["listTeam"],
            Self::ClearTeams => &["clearTeam"],
            Self::AddMatch => &["addMatch"],
            Self::DeleteMatch => &["deleteMatch"],
            Self::ListMatches => &["listMatch"],
            Self::ClearMatches => &["clearMatch"],
            Self::Help => &["help"],
            Self::Exit => &["exit"],
        }
    }

    /// Canonical command word, also used as the log label.
    pub fn word(self) -> &'static str {
        self.words()[0]
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::AddPlayer => concat!(
                "addPlayer: Adds a player to the league.\n",
                "Parameters: NAME p/POSITION a/AGE sal/SALARY gs/GOALS_SCORED ga/GOALS_ASSISTED ",
                "tm/TEAM ctry/NATIONALITY jn/JERSEY_NUMBER app/APPEARANCES hs/HEALTH_STATUS [t/TAG]...\n",
                "Example: addPlayer Lionel Messi p/RW a/30 sal/2000000 gs/30 ga/20 tm/FC Barcelona ",
                "ctry/Argentina jn/10 app/54 hs/Healthy t/captain"
            ),
            Self::AddFast => concat!(
                "addFast: Adds a player with zeroed statistics and a Healthy status.\n",
                "Parameters: NAME p/POSITION a/AGE sal/SALARY tm/TEAM ctry/NATIONALITY ",
                "jn/JERSEY_NUMBER [t/TAG]...\n",
                "Example: addFast Kylian Mbappe p/Striker a/25 sal/1500000 tm/Real Madrid ",
                "ctry/France jn/9"
            ),
            Self::DeletePlayer => concat!(
                "deletePlayer: Deletes the player identified by the index number used in the last player listing.\n",
                "Parameters: INDEX\n",
                "Example: deletePlayer 1"
            ),
            Self::ViewPlayer => concat!(
                "view: Shows a summary of the player identified by the index number used in the last player listing.\n",
                "Parameters: INDEX\n",
                "Example: view 1"
            ),
            Self::ViewAllPlayer => concat!(
                "displayProfile: Shows the full profile of the player identified by the index number used in the last player listing.\n",
                "Parameters: INDEX\n",
                "Example: displayProfile 1"
            ),
            Self::FindPlayer => concat!(
                "findPlayer: Finds all players whose names contain any of the specified keywords (case-sensitive) ",
                "and displays them as a list with index numbers.\n",
                "Parameters: KEYWORD [MORE_KEYWORDS]...\n",
                "Example: findPlayer Lionel Cristiano"
            ),
            Self::ListPlayers => concat!(
                "listPlayer: Displays all players in the league as a list with index numbers.\n",
                "Example: listPlayer"
            ),
            Self::ClearPlayers => concat!(
                "clearPlayer: Clears all players from the league.\n",
                "Example: clearPlayer"
            ),
            Self::AddTeam => concat!(
                "addTeam: Adds a team to the league.\n",
                "Parameters: NAME c/COUNTRY s/SPONSOR [t/TAG]...\n",
                "Example: addTeam FC Barcelona c/Spain s/Spotify t/champions"
            ),
            Self::DeleteTeam => concat!(
                "deleteTeam: Deletes the team identified by the index number used in the last team listing.\n",
                "Parameters: INDEX\n",
                "Example: deleteTeam 1"
            ),
            Self::ViewTeam => concat!(
                "viewTeam: Shows the team identified by the index number used in the last team listing.\n",
                "Parameters: INDEX\n",
                "Example: viewTeam 1"
            ),
            Self::FindTeam => concat!(
                "findTeam: Finds all teams whose names contain any of the specified keywords (case-sensitive) ",
                "and displays them as a list with index numbers.\n",
                "Parameters: KEYWORD [MORE_KEYWORDS]...\n",
                "Example: findTeam Barcelona Madrid"
            ),
            Self::ListTeams => concat!(
                "listTeam: Displays all teams in the league as a list with index numbers.\n",
                "Example: listTeam"
            ),
            Self::ClearTeams => concat!(
                "clearTeam: Clears all teams from the league.\n",
                "Example: clearTeam"
            ),
            Self::AddMatch => concat!(
                "addMatch: Adds a match to the league.\n",
                "Parameters: DATE h/HOME_TEAM a/AWAY_TEAM st/STADIUM [t/TAG]...\n",
                "Example: addMatch 2024-05-01 h/FC Barcelona a/Real Madrid st/Camp Nou t/derby"
            ),
            Self::DeleteMatch => concat!(
                "deleteMatch: Deletes the match identified by the index number used in the last match listing.\n",
                "Parameters: INDEX\n",
                "Example: deleteMatch 1"
            ),
            Self::ListMatches => concat!(
                "listMatch: Displays all matches in the league as a list with index numbers.\n",
                "Example: listMatch"
            ),
            Self::ClearMatches => concat!(
                "clearMatch: Clears all matches from the league.\n",
                "Example: clearMatch"
            ),
            Self::Help => concat!(
                "help: Shows program usage instructions.\n",
                "Example: help"
            ),
            Self::Exit => concat!(
                "exit: Exits the program.\n",
                "Example: exit"
            ),
        }
    }
}

/// Usage text of every verb, one block per line group.
pub fn all_usages() -> String {
    Verb::ALL
        .iter()
        .map(|verb| verb.usage())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{all_usages, Verb};

    #[test]
    fn every_word_maps_back_to_its_verb() {
        for verb in Verb::ALL {
            for word in verb.words() {
                assert_eq!(Verb::from_word(word), Some(verb));
            }
            assert!(verb.usage().starts_with(verb.word()));
        }
    }

    #[test]
    fn words_are_case_sensitive() {
        assert_eq!(Verb::from_word("list"), Some(Verb::ListPlayers));
        assert_eq!(Verb::from_word("LIST"), None);
        assert_eq!(Verb::from_word("AddPlayer"), None);
    }

    #[test]
    fn help_text_lists_every_verb() {
        let text = all_usages();
        for verb in Verb::ALL {
            assert!(text.contains(verb.usage()));
        }
    }
}
