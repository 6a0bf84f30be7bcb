//! Rule-based English lemmatizer.
//!
//! Input is a lowercase alphabetic word. Lookup order:
//! 1. irregular forms (`ran` → `run`, `children` → `child`)
//! 2. invariant words that only look inflected (`kubernetes`, `analytics`)
//! 3. suffix rules for plurals, `-ed` and `-ing`, with consonant un-doubling
//!    and silent-`e` restoration (`managing` → `manage`, `running` → `run`)

const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("going", "go"),
    ("ran", "run"),
    ("made", "make"),
    ("making", "make"),
    ("taking", "take"),
    ("took", "take"),
    ("taken", "take"),
    ("built", "build"),
    ("led", "lead"),
    ("taught", "teach"),
    ("thought", "think"),
    ("wrote", "write"),
    ("written", "write"),
    ("writing", "write"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("sought", "seek"),
    ("held", "hold"),
    ("kept", "keep"),
    ("left", "leave"),
    ("lost", "lose"),
    ("met", "meet"),
    ("paid", "pay"),
    ("said", "say"),
    ("sold", "sell"),
    ("sent", "send"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("told", "tell"),
    ("understood", "understand"),
    ("won", "win"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("gave", "give"),
    ("given", "give"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("knew", "know"),
    ("known", "know"),
    ("saw", "see"),
    ("seen", "see"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("got", "get"),
    ("gotten", "get"),
    ("found", "find"),
    ("created", "create"),
    ("creating", "create"),
    ("synced", "sync"),
    ("syncing", "sync"),
    ("felt", "feel"),
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("criteria", "criterion"),
    ("analyses", "analysis"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

const INVARIANT: &[&str] = &[
    "alias",
    "always",
    "analytics",
    "atlas",
    "bias",
    "canvas",
    "devops",
    "economics",
    "electronics",
    "ethics",
    "graphics",
    "jenkins",
    "kubernetes",
    "logistics",
    "mathematics",
    "news",
    "pandas",
    "physics",
    "postgres",
    "robotics",
    "series",
    "species",
    "statistics",
];

/// Stem endings that lost a silent `e` when `-ed`/`-ing` was added.
const SILENT_E_ENDINGS: &[&str] = &[
    "at", "bl", "iz", "yz", "ut", "al", "ag", "dg", "os", "as", "aus", "uir", "v", "c",
];

pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return (*lemma).to_string();
    }
    if word.len() <= 3 || INVARIANT.contains(&word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with('x')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !(stem.ends_with('s') || stem.ends_with('u') || stem.ends_with('i')) {
            return stem.to_string();
        }
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ied") {
        if word.len() > 4 {
            return format!("{stem}y");
        }
    }
    if word.ends_with("eed") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return restore_stem(stem).unwrap_or_else(|| word.to_string());
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return restore_stem(stem).unwrap_or_else(|| word.to_string());
    }

    word.to_string()
}

/// Rebuilds the base form from a stem with its `-ed`/`-ing` removed.
/// Returns `None` when the stem is too short or has no vowel.
fn restore_stem(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 3 || !chars.iter().any(|c| is_vowel(*c) || *c == 'y') {
        return None;
    }

    let n = chars.len();
    let last = chars[n - 1];
    if n >= 4 && last == chars[n - 2] && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        return Some(chars[..n - 1].iter().collect());
    }

    if needs_silent_e(stem, &chars) {
        return Some(format!("{stem}e"));
    }
    Some(stem.to_string())
}

fn needs_silent_e(stem: &str, chars: &[char]) -> bool {
    let n = chars.len();
    // seat, treat, reveal, shout: a vowel pair before the final t/l/c
    if n >= 3
        && matches!(chars[n - 1], 't' | 'l' | 'c')
        && is_vowel(chars[n - 2])
        && is_vowel(chars[n - 3])
    {
        return false;
    }
    if SILENT_E_ENDINGS.iter().any(|end| stem.ends_with(end)) {
        return true;
    }
    // required, secured: consonant + "ir"/"ur"
    if n >= 3 && (stem.ends_with("ir") || stem.ends_with("ur")) && !is_vowel(chars[n - 3]) {
        return true;
    }
    // single-syllable consonant-vowel-consonant: coded, named, hoped
    n == 3
        && !is_vowel(chars[0])
        && is_vowel(chars[1])
        && !is_vowel(chars[2])
        && !matches!(chars[2], 'w' | 'x' | 'y')
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
