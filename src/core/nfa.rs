//! Exact pattern-coverage comparison for complicated entries.
//!
//! The list files use a restricted regex dialect: literals and `\` escapes,
//! `.`, postfix `*`/`?`, alternation, groups, character classes, and edge
//! anchors. That dialect is regular with a small effective alphabet, so
//! subsumption between two entries is decidable: parse both into NFAs and
//! check language inclusion by a product subset construction over the
//! partition {each mentioned character, everything else}.
//!
//! Entries denote full-string matches; `^`/`$` are stripped before parsing
//! and rejected anywhere else.

use std::collections::{BTreeSet, HashSet, VecDeque};

use anyhow::{Result, bail};

use crate::core::pattern::strip_unescaped_suffix;

/// Upper bound on characters a single class range may span. Real lists use
/// short ASCII ranges; anything larger is treated as unparsable.
const MAX_CLASS_RANGE: u32 = 4096;

#[derive(Debug, Clone)]
enum Ast {
    Empty,
    Literal(char),
    Any,
    Class { negated: bool, chars: BTreeSet<char> },
    Concat(Vec<Ast>),
    Alternate(Vec<Ast>),
    Star(Box<Ast>),
    Optional(Box<Ast>),
}

#[derive(Debug, Clone)]
enum Label {
    Any,
    Char(char),
    Class { negated: bool, chars: BTreeSet<char> },
}

impl Label {
    fn matches(&self, c: char) -> bool {
        match self {
            Label::Any => true,
            Label::Char(x) => *x == c,
            Label::Class { negated, chars } => chars.contains(&c) != *negated,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    eps: Vec<usize>,
    trans: Vec<(Label, usize)>,
}

/// A compiled pattern, ready for membership and inclusion queries.
#[derive(Debug)]
pub struct PatternNfa {
    states: Vec<State>,
    start: usize,
    accept: usize,
}

impl PatternNfa {
    /// Parse a complicated pattern into an automaton.
    ///
    /// Fails on syntax outside the restricted dialect; callers keep such
    /// entries verbatim rather than guessing.
    pub fn parse(pattern: &str) -> Result<PatternNfa> {
        let body = pattern.strip_prefix('^').unwrap_or(pattern);
        let body = strip_unescaped_suffix(body, "$").unwrap_or(body);

        let mut parser = Parser {
            chars: body.chars().collect(),
            pos: 0,
        };
        let ast = parser.parse_alternation()?;
        if parser.pos != parser.chars.len() {
            bail!("unexpected '{}' at position {}", parser.chars[parser.pos], parser.pos);
        }

        let mut nfa = PatternNfa {
            states: Vec::new(),
            start: 0,
            accept: 0,
        };
        let (start, accept) = nfa.compile(&ast);
        nfa.start = start;
        nfa.accept = accept;
        Ok(nfa)
    }

    /// True if the automaton accepts `input` as a whole string.
    pub fn matches(&self, input: &str) -> bool {
        let mut current = self.eclose([self.start].into_iter().collect());
        for c in input.chars() {
            current = self.eclose(self.step(&current, c));
            if current.is_empty() {
                return false;
            }
        }
        current.contains(&self.accept)
    }

    /// True if every string this pattern matches is also matched by `other`.
    pub fn is_subset_of(&self, other: &PatternNfa) -> bool {
        let symbols = symbol_partition(&[self, other]);

        let start = (
            self.eclose([self.start].into_iter().collect()),
            other.eclose([other.start].into_iter().collect()),
        );
        let mut seen: HashSet<(BTreeSet<usize>, BTreeSet<usize>)> = HashSet::new();
        let mut queue: VecDeque<(BTreeSet<usize>, BTreeSet<usize>)> = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back(start);

        while let Some((ours, theirs)) = queue.pop_front() {
            if ours.contains(&self.accept) && !theirs.contains(&other.accept) {
                return false;
            }
            for &c in &symbols {
                let next_ours = self.eclose(self.step(&ours, c));
                if next_ours.is_empty() {
                    // Nothing we match down this branch, nothing to cover.
                    continue;
                }
                let next_theirs = other.eclose(other.step(&theirs, c));
                let pair = (next_ours, next_theirs);
                if seen.insert(pair.clone()) {
                    queue.push_back(pair);
                }
            }
        }
        true
    }

    /// A shortest accepted string, using representative characters for
    /// wildcard and negated-class transitions. Used as a cheap pre-check:
    /// if a candidate superset does not even match this, it cannot cover us.
    pub fn shortest_member(&self) -> Option<String> {
        let symbols = symbol_partition(&[self]);
        let start = self.eclose([self.start].into_iter().collect());
        let mut seen: HashSet<BTreeSet<usize>> = HashSet::new();
        let mut queue: VecDeque<(BTreeSet<usize>, String)> = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back((start, String::new()));

        while let Some((states, prefix)) = queue.pop_front() {
            if states.contains(&self.accept) {
                return Some(prefix);
            }
            for &c in &symbols {
                let next = self.eclose(self.step(&states, c));
                if next.is_empty() {
                    continue;
                }
                if seen.insert(next.clone()) {
                    let mut extended = prefix.clone();
                    extended.push(c);
                    queue.push_back((next, extended));
                }
            }
        }
        None
    }

    fn add_state(&mut self) -> usize {
        self.states.push(State::default());
        self.states.len() - 1
    }

    /// Thompson construction; returns the fragment's (start, accept) pair.
    fn compile(&mut self, ast: &Ast) -> (usize, usize) {
        match ast {
            Ast::Empty => {
                let s = self.add_state();
                (s, s)
            }
            Ast::Literal(c) => self.single(Label::Char(*c)),
            Ast::Any => self.single(Label::Any),
            Ast::Class { negated, chars } => self.single(Label::Class {
                negated: *negated,
                chars: chars.clone(),
            }),
            Ast::Concat(parts) => {
                let mut fragment: Option<(usize, usize)> = None;
                for part in parts {
                    let (ps, pa) = self.compile(part);
                    fragment = Some(match fragment {
                        None => (ps, pa),
                        Some((fs, fa)) => {
                            self.states[fa].eps.push(ps);
                            (fs, pa)
                        }
                    });
                }
                fragment.unwrap_or_else(|| {
                    let s = self.add_state();
                    (s, s)
                })
            }
            Ast::Alternate(branches) => {
                let start = self.add_state();
                let accept = self.add_state();
                for branch in branches {
                    let (bs, ba) = self.compile(branch);
                    self.states[start].eps.push(bs);
                    self.states[ba].eps.push(accept);
                }
                (start, accept)
            }
            Ast::Star(inner) => {
                let start = self.add_state();
                let accept = self.add_state();
                let (is, ia) = self.compile(inner);
                self.states[start].eps.extend([is, accept]);
                self.states[ia].eps.extend([is, accept]);
                (start, accept)
            }
            Ast::Optional(inner) => {
                let start = self.add_state();
                let accept = self.add_state();
                let (is, ia) = self.compile(inner);
                self.states[start].eps.extend([is, accept]);
                self.states[ia].eps.push(accept);
                (start, accept)
            }
        }
    }

    fn single(&mut self, label: Label) -> (usize, usize) {
        let start = self.add_state();
        let accept = self.add_state();
        self.states[start].trans.push((label, accept));
        (start, accept)
    }

    fn eclose(&self, mut states: BTreeSet<usize>) -> BTreeSet<usize> {
        let mut stack: Vec<usize> = states.iter().copied().collect();
        while let Some(s) = stack.pop() {
            for &next in &self.states[s].eps {
                if states.insert(next) {
                    stack.push(next);
                }
            }
        }
        states
    }

    fn step(&self, states: &BTreeSet<usize>, c: char) -> BTreeSet<usize> {
        let mut next = BTreeSet::new();
        for &s in states {
            for (label, target) in &self.states[s].trans {
                if label.matches(c) {
                    next.insert(*target);
                }
            }
        }
        next
    }

    fn mentioned_chars(&self, out: &mut BTreeSet<char>) {
        for state in &self.states {
            for (label, _) in &state.trans {
                match label {
                    Label::Any => {}
                    Label::Char(c) => {
                        out.insert(*c);
                    }
                    Label::Class { chars, .. } => out.extend(chars.iter().copied()),
                }
            }
        }
    }
}

/// Every character either automaton distinguishes, plus one representative
/// for the rest of the alphabet. Transitions treat all unmentioned
/// characters identically, so one representative is exact.
fn symbol_partition(nfas: &[&PatternNfa]) -> Vec<char> {
    let mut chars = BTreeSet::new();
    for nfa in nfas {
        nfa.mentioned_chars(&mut chars);
    }
    let mut other = '\u{E000}';
    while chars.contains(&other) {
        other = char::from_u32(other as u32 + 1).expect("private use area not exhausted");
    }
    chars.insert(other);
    chars.into_iter().collect()
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn parse_alternation(&mut self) -> Result<Ast> {
        let mut branches = vec![self.parse_concat()?];
        while self.peek() == Some('|') {
            self.bump();
            branches.push(self.parse_concat()?);
        }
        if branches.len() == 1 {
            Ok(branches.pop().expect("one branch"))
        } else {
            Ok(Ast::Alternate(branches))
        }
    }

    fn parse_concat(&mut self) -> Result<Ast> {
        let mut parts = Vec::new();
        while let Some(c) = self.peek() {
            if c == '|' || c == ')' {
                break;
            }
            parts.push(self.parse_repeat()?);
        }
        match parts.len() {
            0 => Ok(Ast::Empty),
            1 => Ok(parts.pop().expect("one part")),
            _ => Ok(Ast::Concat(parts)),
        }
    }

    fn parse_repeat(&mut self) -> Result<Ast> {
        let mut node = self.parse_atom()?;
        while let Some(c) = self.peek() {
            match c {
                '*' => {
                    self.bump();
                    node = Ast::Star(Box::new(node));
                }
                '?' => {
                    self.bump();
                    node = Ast::Optional(Box::new(node));
                }
                _ => break,
            }
        }
        Ok(node)
    }

    fn parse_atom(&mut self) -> Result<Ast> {
        let c = match self.bump() {
            Some(c) => c,
            None => bail!("unexpected end of pattern"),
        };
        match c {
            '(' => {
                let inner = self.parse_alternation()?;
                if self.bump() != Some(')') {
                    bail!("unclosed group");
                }
                Ok(inner)
            }
            '[' => self.parse_class(),
            '\\' => match self.bump() {
                Some(escaped) => Ok(Ast::Literal(escaped)),
                None => bail!("dangling escape"),
            },
            '.' => Ok(Ast::Any),
            '*' | '?' => bail!("repetition without target"),
            // Postfix repetition beyond */? would silently change the
            // language if read as a literal.
            '+' | '{' | '}' => bail!("unsupported repetition syntax"),
            ']' => bail!("unmatched ']'"),
            '^' | '$' => bail!("anchor inside pattern"),
            _ => Ok(Ast::Literal(c)),
        }
    }

    fn parse_class(&mut self) -> Result<Ast> {
        let negated = self.peek() == Some('^');
        if negated {
            self.bump();
        }
        let mut chars = BTreeSet::new();
        loop {
            let c = match self.bump() {
                Some(']') => break,
                Some('\\') => match self.bump() {
                    Some(escaped) => escaped,
                    None => bail!("dangling escape in class"),
                },
                Some(c) => c,
                None => bail!("unclosed character class"),
            };
            // 'c-x' is a range unless the '-' closes the class.
            if self.peek() == Some('-') && self.chars.get(self.pos + 1) != Some(&']') {
                self.bump();
                let hi = match self.bump() {
                    Some('\\') => match self.bump() {
                        Some(escaped) => escaped,
                        None => bail!("dangling escape in class"),
                    },
                    Some(hi) => hi,
                    None => bail!("unclosed character class"),
                };
                let (lo, hi) = (c as u32, hi as u32);
                if hi < lo {
                    bail!("invalid class range");
                }
                if hi - lo > MAX_CLASS_RANGE {
                    bail!("class range too large");
                }
                for cp in lo..=hi {
                    if let Some(ch) = char::from_u32(cp) {
                        chars.insert(ch);
                    }
                }
            } else {
                chars.insert(c);
            }
        }
        if chars.is_empty() {
            bail!("empty character class");
        }
        Ok(Ast::Class { negated, chars })
    }
}
