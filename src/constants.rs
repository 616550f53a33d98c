/// Characters which always end a sentence fragment.
///
/// Apostrophes and hyphens are handled separately by the tokenizer since they are only
/// delimiters when they do not join two word characters.
pub const SENTENCE_DELIMITERS: &[char] = &[
    '.', '!', '?', ',', ';', ':', '\t', '\n', '\r', '"', '(', ')', '[', ']', '{', '}', '\u{201C}',
    '\u{201D}', '\u{2013}', '\u{2014}', '\u{2026}',
];

/// Characters which are kept inside a word token when surrounded by word characters
/// (e.g. `state-of-the-art`, `don't`).
pub const WORD_JOINERS: &[char] = &['-', '\'', '\u{2019}'];

/// Fixed English stop-word list used as phrase delimiters.
///
/// Entries are lowercase. Contractions use the straight apostrophe; the tokenizer folds the
/// typographic apostrophe into it before lookups.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "able", "about", "above", "according", "accordingly", "across", "actually", "after",
    "afterwards", "again", "against", "ain't", "all", "allow", "allows", "almost", "alone",
    "along", "already", "also", "although", "always", "am", "among", "amongst", "an", "and",
    "another", "any", "anybody", "anyhow", "anyone", "anything", "anyway", "anyways", "anywhere",
    "apart", "appear", "appropriate", "are", "aren't", "around", "as", "aside", "ask", "asking",
    "at", "available", "away", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "believe", "below", "beside", "besides", "best",
    "better", "between", "beyond", "both", "brief", "but", "by", "came", "can", "can't", "cannot",
    "cant", "certain", "certainly", "clearly", "come", "comes", "could", "couldn't", "currently",
    "definitely", "did", "didn't", "do", "does", "doesn't", "doing", "don't", "done", "down",
    "during", "each", "eg", "either", "else", "elsewhere", "enough", "entirely", "especially",
    "etc", "even", "ever", "every", "everybody", "everyone", "everything", "everywhere", "ex",
    "exactly", "example", "except", "far", "few", "followed", "following", "for", "former",
    "formerly", "forth", "from", "further", "furthermore", "get", "gets", "getting", "given",
    "gives", "go", "goes", "going", "gone", "got", "gotten", "had", "hadn't", "happens", "hardly",
    "has", "hasn't", "have", "haven't", "having", "he", "he's", "hello", "hence", "her", "here",
    "here's", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "hi", "him",
    "himself", "his", "hither", "hopefully", "how", "howbeit", "however", "i", "i'd", "i'll",
    "i'm", "i've", "ie", "if", "ignored", "immediate", "in", "inasmuch", "inc", "indeed",
    "indicate", "indicated", "indicates", "inner", "insofar", "instead", "into", "inward", "is",
    "isn't", "it", "it'd", "it'll", "it's", "its", "itself", "just", "keep", "keeps", "kept",
    "know", "known", "knows", "last", "lately", "later", "latter", "latterly", "least", "less",
    "lest", "let", "let's", "like", "liked", "likely", "little", "look", "looking", "looks", "ltd",
    "mainly", "many", "may", "maybe", "me", "mean", "meanwhile", "merely", "might", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "nd", "near",
    "nearly", "necessary", "need", "needs", "neither", "never", "nevertheless", "no", "nobody",
    "non", "none", "noone", "nor", "normally", "not", "nothing", "novel", "now", "nowhere",
    "obviously", "of", "off", "often", "oh", "ok", "okay", "old", "on", "once", "one", "ones",
    "only", "onto", "or", "other", "others", "otherwise", "ought", "our", "ours", "ourselves",
    "out", "outside", "over", "overall", "own", "particular", "particularly", "per", "perhaps",
    "placed", "please", "possible", "presumably", "probably", "provides", "que", "quite", "qv",
    "rather", "rd", "re", "really", "reasonably", "regarding", "regardless", "regards",
    "relatively", "respectively", "right", "said", "same", "saw", "say", "saying", "says",
    "secondly", "see", "seeing", "seem", "seemed", "seeming", "seems", "seen", "self", "selves",
    "sensible", "sent", "serious", "seriously", "several", "shall", "she", "should", "shouldn't",
    "since", "so", "some", "somebody", "somehow", "someone", "something", "sometime", "sometimes",
    "somewhat", "somewhere", "soon", "sorry", "specified", "specify", "specifying", "still",
    "sub", "such", "sup", "sure", "take", "taken", "tell", "tends", "th", "than", "thank",
    "thanks", "thanx", "that", "that's", "thats", "the", "their", "theirs", "them", "themselves",
    "then", "thence", "there", "there's", "thereafter", "thereby", "therefore", "therein",
    "theres", "thereupon", "these", "they", "they'd", "they'll", "they're", "they've", "think",
    "this", "thorough", "thoroughly", "those", "though", "through", "throughout", "thru", "thus",
    "to", "together", "too", "took", "toward", "towards", "tried", "tries", "truly", "try",
    "trying", "twice", "un", "under", "unfortunately", "unless", "unlikely", "until", "unto",
    "up", "upon", "us", "use", "used", "useful", "uses", "using", "usually", "value", "various",
    "very", "via", "viz", "vs", "want", "wants", "was", "wasn't", "way", "we", "we'd", "we'll",
    "we're", "we've", "welcome", "well", "went", "were", "weren't", "what", "what's", "whatever",
    "when", "whence", "whenever", "where", "where's", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "who's",
    "whoever", "whole", "whom", "whose", "why", "will", "willing", "wish", "with", "within",
    "without", "won't", "wonder", "would", "wouldn't", "yes", "yet", "you", "you'd", "you'll",
    "you're", "you've", "your", "yours", "yourself", "yourselves",
];
