use enum_iterator::Sequence;
use strum_macros::Display;

// Display labels are the fixed Norwegian vocabulary of the output table,
// not the variant names.

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Gender {
    #[strum(serialize = "Mann")]
    Male,
    #[strum(serialize = "Kvinne")]
    Female,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Nationality {
    #[strum(serialize = "Norsk")]
    Norwegian,
    #[strum(serialize = "Svensk")]
    Swedish,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Education {
    #[strum(serialize = "Grunnskole")]
    Primary,
    #[strum(serialize = "Videregående")]
    Secondary,
    #[strum(serialize = "Høyere utdanning")]
    Higher,
}
