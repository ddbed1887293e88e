use crate::domain::model::Reply;

impl Reply {
    pub fn classify(text: &str) -> Reply {
        let text = text.trim();

        if text.is_empty() {
            return Reply::Silence;
        }

        let shouting = text.chars().any(char::is_alphabetic) && text.to_uppercase() == text;
        let question = text.ends_with('?');

        match (shouting, question) {
            (true, true) => Reply::ShoutingQuestion,
            (true, false) => Reply::Shouting,
            (false, true) => Reply::Question,
            (false, false) => Reply::Default,
        }
    }
}

pub fn respond(text: &str) -> &'static str {
    Reply::classify(text).text()
}

/// Looks a reply up by its category tag; unknown tags get the default reply.
pub fn reply_for_tag(tag: &str) -> &'static str {
    Reply::from_tag(tag).unwrap_or(Reply::Default).text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence() {
        assert_eq!(respond(""), "Fine. Be that way!");
        assert_eq!(respond("   \t\n"), "Fine. Be that way!");
    }

    #[test]
    fn test_shouting() {
        assert_eq!(respond("WATCH OUT!"), "Whoa, chill out!");
        assert_eq!(respond("1, 2, 3 GO!"), "Whoa, chill out!");
        assert_eq!(respond("WHAT THE HELL?"), "Calm down, I know what I'm doing!");
    }

    #[test]
    fn test_question() {
        assert_eq!(respond("Does this cryogenic chamber make me look fat?"), "Sure.");
        assert_eq!(respond("4?"), "Sure.");
        assert_eq!(respond("Okay if like my  spacebar  quite a bit?   "), "Sure.");
    }

    #[test]
    fn test_default() {
        assert_eq!(respond("Tom-ay-to, tom-aaaah-to."), "Whatever.");
        assert_eq!(respond("1, 2, 3"), "Whatever.");
        assert_eq!(respond("Ending with ? means a question."), "Whatever.");
    }

    #[test]
    fn test_tag_lookup_falls_back_to_default() {
        assert_eq!(reply_for_tag("question"), "Sure.");
        assert_eq!(reply_for_tag("grumbling"), "Whatever.");
    }
}
