pub mod compiler;

use self::compiler::{CompilerConfig, Language};

/// Per language overrides of the compiler defaults, as the host provides them for
/// the code currently being run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides<'a> {
    pub c: Option<CompilerConfig<'a>>,
    pub cpp: Option<CompilerConfig<'a>>,
}

impl<'a> Overrides<'a> {
    pub fn for_language(&self, language: Language) -> Option<&CompilerConfig<'a>> {
        match language {
            Language::C => self.c.as_ref(),
            Language::Cpp => self.cpp.as_ref(),
        }
    }

    /// Layers `other` on top of `self`, language by language
    pub fn merge(self, other: Overrides<'a>) -> Overrides<'a> {
        Overrides {
            c: merge_opt(self.c, other.c),
            cpp: merge_opt(self.cpp, other.cpp),
        }
    }

    /// The configuration that a run of `language` must use: the language defaults
    /// with the overrides for it applied
    pub fn resolve(&self, language: Language) -> CompilerConfig<'a> {
        let defaults = CompilerConfig::language_default(language);
        match self.for_language(language) {
            Some(overrides) => defaults.merge(overrides.clone()),
            None => defaults,
        }
    }
}

fn merge_opt<'a>(
    base: Option<CompilerConfig<'a>>,
    over: Option<CompilerConfig<'a>>,
) -> Option<CompilerConfig<'a>> {
    match (base, over) {
        (Some(base), Some(over)) => Some(base.merge(over)),
        (base, over) => over.or(base),
    }
}
