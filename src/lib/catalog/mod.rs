//! The compatibility table between the supported languages, their compilers and the
//! language standards that every compiler is able to build.
//!
//! The table is plain immutable data, so every lookup is a linear search over a handful of
//! entries. Unknown entries yield empty results, never an error.

use crate::project_model::compiler::Language;

/// What a compiler driver supports for a concrete [`Language`]
#[derive(Debug, PartialEq, Eq)]
pub struct CompilerSupport {
    pub name: &'static str,
    pub standards: &'static [&'static str],
    /// Flag that selects the alternative standard library of the driver
    pub stdlib_flag: Option<&'static str>,
    /// Libraries that must be linked when building with a concrete standard
    pub additional_libs: &'static [(&'static str, &'static str)],
}

impl CompilerSupport {
    pub fn supports(&self, standard: &str) -> bool {
        self.standards.contains(&standard)
    }

    pub fn additional_libs_for(&self, standard: &str) -> Option<&'static str> {
        self.additional_libs
            .iter()
            .find(|(std, _)| *std == standard)
            .map(|(_, libs)| *libs)
    }
}

const C_SUPPORT: &[CompilerSupport] = &[
    CompilerSupport {
        name: "gcc-4.9",
        standards: &["c89", "c99", "c11"],
        stdlib_flag: None,
        additional_libs: &[("c11", "-latomic")],
    },
    CompilerSupport {
        name: "g++-4.9",
        standards: &["c89", "c99", "c11"],
        stdlib_flag: None,
        additional_libs: &[("c11", "-latomic")],
    },
    CompilerSupport {
        name: "g++-5.2",
        standards: &["c89", "c99", "c11"],
        stdlib_flag: None,
        additional_libs: &[("c11", "-latomic")],
    },
    CompilerSupport {
        name: "g++",
        standards: &["c89", "c99", "c11", "c17", "c2x"],
        stdlib_flag: None,
        additional_libs: &[("c11", "-latomic"), ("c17", "-latomic"), ("c2x", "-latomic")],
    },
    CompilerSupport {
        name: "clang",
        standards: &["c89"],
        stdlib_flag: None,
        additional_libs: &[],
    },
    CompilerSupport {
        name: "clang++",
        standards: &["c99", "c11"],
        stdlib_flag: None,
        additional_libs: &[("c11", "-latomic")],
    },
];

const CPP_SUPPORT: &[CompilerSupport] = &[
    CompilerSupport {
        name: "g++-4.9",
        standards: &["c++98", "c++11", "c++14"],
        stdlib_flag: None,
        additional_libs: &[("c++11", "-latomic"), ("c++14", "-latomic")],
    },
    CompilerSupport {
        name: "g++-5.2",
        standards: &["c++98", "c++11", "c++14", "c++1z"],
        stdlib_flag: None,
        additional_libs: &[
            ("c++11", "-latomic"),
            ("c++14", "-latomic"),
            ("c++1z", "-latomic"),
        ],
    },
    CompilerSupport {
        name: "g++",
        standards: &["c++98", "c++11", "c++14", "c++17", "c++20", "c++23"],
        stdlib_flag: None,
        additional_libs: &[
            ("c++11", "-latomic"),
            ("c++14", "-latomic"),
            ("c++17", "-latomic"),
            ("c++20", "-latomic"),
            ("c++23", "-latomic"),
        ],
    },
    CompilerSupport {
        name: CLANG_CPP_DRIVER,
        standards: &["c++98", "c++11", "c++14", "c++17"],
        stdlib_flag: Some("-stdlib=libc++"),
        additional_libs: &[
            ("c++11", "-latomic -lsupc++"),
            ("c++14", "-latomic -lsupc++"),
            ("c++17", "-latomic -lsupc++"),
        ],
    },
];

/// The clang family C++ driver, the only one that offers an alternative standard library
pub const CLANG_CPP_DRIVER: &str = "clang++";

/// All the [`CompilerSupport`] entries registered for `language`, in declaration order
pub fn entries(language: Language) -> &'static [CompilerSupport] {
    match language {
        Language::C => C_SUPPORT,
        Language::Cpp => CPP_SUPPORT,
    }
}

pub fn compiler_support(compiler: &str, language: Language) -> Option<&'static CompilerSupport> {
    entries(language).iter().find(|entry| entry.name == compiler)
}

pub fn supported_compilers(language: Language) -> Vec<&'static str> {
    entries(language).iter().map(|entry| entry.name).collect()
}

pub fn is_supported_compiler(compiler: &str, language: Language) -> bool {
    compiler_support(compiler, language).is_some()
}

/// The standards that `compiler` is able to build for `language`. Empty if the compiler
/// isn't registered for the language.
pub fn supported_standards(compiler: &str, language: Language) -> &'static [&'static str] {
    compiler_support(compiler, language)
        .map(|entry| entry.standards)
        .unwrap_or_default()
}

/// The extra linker libraries registered for the (`compiler`, `standard`, `language`) triple,
/// or an empty string if there's none
pub fn extra_libraries(compiler: &str, standard: &str, language: Language) -> &'static str {
    compiler_support(compiler, language)
        .and_then(|entry| entry.additional_libs_for(standard))
        .unwrap_or_default()
}

/// The standard library selection flag of `compiler`.
///
/// The flag belongs to the C++ driver, so it's looked up on the C++ entries regardless of the
/// language being compiled.
pub fn stdlib_flag(compiler: &str) -> Option<&'static str> {
    compiler_support(compiler, Language::Cpp).and_then(|entry| entry.stdlib_flag)
}
