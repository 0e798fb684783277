// src/services/content_policy.rs
use std::collections::BTreeSet;

use regex::Regex;
use thiserror::Error;

/// Words per compiled matcher. Keeps each regex well under the size limit
/// however long the configured list gets.
const CHUNK_SIZE: usize = 1024;

/// Built-in English word list, a subset of the common `bad-words` list.
const BUILTIN_WORDS: &[&str] = &[
    "2g1c", "acrotomophilia", "anal", "anilingus", "anus", "apeshit", "arse", "arsehole", "ass",
    "asshole", "assmunch", "autoerotic", "babeland", "bangbros", "bareback", "barenaked",
    "bastard", "bastardo", "bastinado", "bbw", "bdsm", "beaner", "beaners", "bestiality",
    "bimbos", "birdlock", "bitch", "bitches", "bloody", "blowjob", "blumpkin", "bollocks",
    "bondage", "boner", "boob", "boobs", "bukkake", "bulldyke", "bullshit", "bunghole", "busty",
    "butt", "buttcheeks", "butthole", "camgirl", "camslut", "carpetmuncher", "circlejerk",
    "clit", "clitoris", "clusterfuck", "cock", "cocks", "coon", "coons", "coprolagnia",
    "coprophilia", "cornhole", "crap", "creampie", "cum", "cumming", "cunnilingus", "cunt",
    "damn", "damned", "darkie", "daterape", "deepthroat", "dendrophilia", "dick", "dickhead",
    "dildo", "dingleberries", "dingleberry", "dipshit", "doggiestyle", "doggystyle", "dolcett",
    "domination", "dominatrix", "dommes", "douche", "douchebag", "dvda", "ecchi", "ejaculation",
    "erotic", "erotism", "escort", "eunuch", "fag", "faggot", "fecal", "felch", "fellatio",
    "feltch", "femdom", "figging", "fingerbang", "fingering", "fisting", "footjob", "frotting",
    "fuck", "fucked", "fucker", "fuckers", "fuckin", "fucking", "fucktards", "fudgepacker",
    "futanari", "gangbang", "genitals", "goatcx", "goatse", "goddamn", "gokkun", "goodpoop",
    "goregasm", "grope", "guro", "handjob", "hardcore", "hell", "hentai", "homoerotic",
    "honkey", "hooker", "horny", "humping", "incest", "intercourse", "jackass", "jailbait",
    "jigaboo", "jiggaboo", "jiggerboo", "jizz", "juggs", "kike", "kinbaku", "kinkster", "kinky",
    "knobbing", "masturbate", "masturbating", "masturbation", "milf", "motherfucker",
    "muffdiving", "nambla", "nawashi", "negro", "neonazi", "nigga", "nigger", "nimphomania",
    "nipple", "nipples", "nsfw", "nude", "nudity", "nympho", "nymphomania", "octopussy",
    "omorashi", "orgasm", "orgy", "paedophile", "paki", "panties", "panty", "pedobear",
    "pedophile", "pegging", "penis", "piss", "pissed", "pissing", "pisspig", "playboy",
    "ponyplay", "poof", "poon", "poontang", "prick", "pthc", "pubes", "punany", "pussy",
    "queaf", "queef", "quim", "raghead", "rape", "raping", "rapist", "rectum", "rimjob",
    "rimming", "sadism", "santorum", "scat", "schlong", "scissoring", "semen", "sex", "sexo",
    "sexy", "shemale", "shibari", "shit", "shitblimp", "shitty", "shota", "shrimping", "skeet",
    "slanteye", "slut", "smut", "snatch", "snowballing", "sodomize", "sodomy", "spic",
    "splooge", "spooge", "spunk", "strapon", "strappado", "suck", "sucks", "swastika",
    "swinger", "threesome", "throating", "tit", "tits", "titties", "titty", "topless", "tosser",
    "towelhead", "tranny", "tribadism", "tubgirl", "tushy", "twat", "twink", "twinkie",
    "undressing", "upskirt", "urophilia", "vagina", "vibrator", "voyeur", "vulva", "wank",
    "wanker", "wetback", "whore", "xx", "xxx", "yaoi", "yiffy", "zoophilia",
];

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to build word matcher: {0}")]
    Matcher(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Permitted,
    Denied,
}

impl Verdict {
    pub fn is_denied(self) -> bool {
        self == Verdict::Denied
    }
}

/// Classifies user text as permitted or denied.
pub trait ContentPolicy: Send + Sync {
    fn classify(&self, text: &str) -> Verdict;
}

/// Case-insensitive whole-word matcher over a word list.
#[derive(Debug, Clone)]
pub struct WordListPolicy {
    words: BTreeSet<String>,
    matchers: Vec<Regex>,
}

impl WordListPolicy {
    pub fn builtin() -> Result<Self, PolicyError> {
        Self::new(BUILTIN_WORDS.iter().copied())
    }

    pub fn new<I, S>(words: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_set(normalize(words))
    }

    pub fn with_extra_words<I, S>(mut self, words: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(normalize(words));
        Self::from_set(self.words)
    }

    pub fn without_words<I, S>(mut self, words: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in normalize(words) {
            self.words.remove(&word);
        }
        Self::from_set(self.words)
    }

    /// Effective list, sorted.
    pub fn words(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    fn from_set(words: BTreeSet<String>) -> Result<Self, PolicyError> {
        let list: Vec<&String> = words.iter().collect();
        let matchers = list
            .chunks(CHUNK_SIZE)
            .map(|chunk| {
                let alternation = chunk
                    .iter()
                    .map(|w| regex::escape(w))
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words, matchers })
    }
}

impl ContentPolicy for WordListPolicy {
    fn classify(&self, text: &str) -> Verdict {
        if self.matchers.iter().any(|re| re.is_match(text)) {
            Verdict::Denied
        } else {
            Verdict::Permitted
        }
    }
}

fn normalize<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_flags_listed_word() {
        let policy = WordListPolicy::builtin().unwrap();
        assert_eq!(policy.classify("you are a damn bot"), Verdict::Denied);
        assert_eq!(policy.classify("What is 2+2?"), Verdict::Permitted);
    }

    #[test]
    fn matching_ignores_case() {
        let policy = WordListPolicy::builtin().unwrap();
        assert!(policy.classify("DAMN it").is_denied());
        assert!(policy.classify("Damn.").is_denied());
    }

    #[test]
    fn matching_is_whole_word() {
        let policy = WordListPolicy::builtin().unwrap();
        // "hello" contains "hell", "class" contains "ass"
        assert!(!policy.classify("hello there").is_denied());
        assert!(!policy.classify("a class in Scunthorpe").is_denied());
    }

    #[test]
    fn extra_and_allowed_words_change_the_list() {
        let policy = WordListPolicy::builtin()
            .and_then(|p| p.with_extra_words(["Frak"]))
            .and_then(|p| p.without_words(["hell"]))
            .unwrap();
        assert!(policy.classify("frak this").is_denied());
        assert!(!policy.classify("what the hell").is_denied());
        assert!(policy.words().contains(&"frak"));
        assert!(!policy.words().contains(&"hell"));
    }

    #[test]
    fn entries_are_matched_literally() {
        let policy = WordListPolicy::new(["a.b", "two words", "  ", ""]).unwrap();
        assert_eq!(policy.words(), vec!["a.b", "two words"]);
        assert!(policy.classify("say a.b now").is_denied());
        assert!(!policy.classify("say axb now").is_denied());
        assert!(policy.classify("just Two Words here").is_denied());
    }

    #[test]
    fn empty_list_permits_everything() {
        let policy = WordListPolicy::new(Vec::<String>::new()).unwrap();
        assert!(!policy.classify("damn").is_denied());
    }

    #[test]
    fn large_list_still_denies_listed_words() {
        let extra: Vec<String> = (0..60_000).map(|i| format!("w{i}")).collect();
        let policy = WordListPolicy::builtin()
            .and_then(|p| p.with_extra_words(&extra))
            .unwrap();

        assert!(policy.words().len() > 60_000);
        assert!(policy.classify("you are a damn bot").is_denied());
        assert!(policy.classify("say W59999 now").is_denied());
        assert!(policy.classify("say w0 now").is_denied());
        assert!(!policy.classify("hello there").is_denied());
    }

    #[test]
    fn builtin_list_is_not_trivially_small() {
        assert!(BUILTIN_WORDS.len() > 200);
    }
}
