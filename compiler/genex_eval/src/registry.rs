//! Name to operation lookup.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::ops::{
    AndOp, AngleROp, BoolOp, BuildInterfaceOp, CommaOp, CompileFeaturesOp, CompileLanguageOp,
    ConfigOp, EqualOp, IfOp, InListOp, InstallInterfaceOp, JoinOp, LowerCaseOp, NotOp, OneOp,
    OrOp, RemoveDuplicatesOp, SemicolonOp, StrEqualOp, TargetExistsOp, TargetNameIfExistsOp,
    TargetObjectsOp, TargetPropertyOp, UpperCaseOp, ZeroOp,
};
use crate::OperationDefinition;

// Static operation instances for 'static lifetime references
static ZERO: ZeroOp = ZeroOp;
static ONE: OneOp = OneOp;
static BOOL: BoolOp = BoolOp;
static AND: AndOp = AndOp;
static OR: OrOp = OrOp;
static NOT: NotOp = NotOp;
static IF: IfOp = IfOp;
static STREQUAL: StrEqualOp = StrEqualOp;
static EQUAL: EqualOp = EqualOp;
static IN_LIST: InListOp = InListOp;
static ANGLE_R: AngleROp = AngleROp;
static COMMA: CommaOp = CommaOp;
static SEMICOLON: SemicolonOp = SemicolonOp;
static LOWER_CASE: LowerCaseOp = LowerCaseOp;
static UPPER_CASE: UpperCaseOp = UpperCaseOp;
static JOIN: JoinOp = JoinOp;
static REMOVE_DUPLICATES: RemoveDuplicatesOp = RemoveDuplicatesOp;
static CONFIG: ConfigOp = ConfigOp;
static COMPILE_LANGUAGE: CompileLanguageOp = CompileLanguageOp;
static TARGET_PROPERTY: TargetPropertyOp = TargetPropertyOp;
static TARGET_EXISTS: TargetExistsOp = TargetExistsOp;
static TARGET_NAME_IF_EXISTS: TargetNameIfExistsOp = TargetNameIfExistsOp;
static TARGET_OBJECTS: TargetObjectsOp = TargetObjectsOp;
static BUILD_INTERFACE: BuildInterfaceOp = BuildInterfaceOp;
static INSTALL_INTERFACE: InstallInterfaceOp = InstallInterfaceOp;
static COMPILE_FEATURES: CompileFeaturesOp = CompileFeaturesOp;

/// Built-in operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinOp {
    Zero,
    One,
    Bool,
    And,
    Or,
    Not,
    If,
    StrEqual,
    Equal,
    InList,
    AngleR,
    Comma,
    Semicolon,
    LowerCase,
    UpperCase,
    Join,
    RemoveDuplicates,
    Config,
    CompileLanguage,
    TargetProperty,
    TargetExists,
    TargetNameIfExists,
    TargetObjects,
    BuildInterface,
    InstallInterface,
    CompileFeatures,
}

impl BuiltinOp {
    pub const ALL: [BuiltinOp; 26] = [
        BuiltinOp::Zero,
        BuiltinOp::One,
        BuiltinOp::Bool,
        BuiltinOp::And,
        BuiltinOp::Or,
        BuiltinOp::Not,
        BuiltinOp::If,
        BuiltinOp::StrEqual,
        BuiltinOp::Equal,
        BuiltinOp::InList,
        BuiltinOp::AngleR,
        BuiltinOp::Comma,
        BuiltinOp::Semicolon,
        BuiltinOp::LowerCase,
        BuiltinOp::UpperCase,
        BuiltinOp::Join,
        BuiltinOp::RemoveDuplicates,
        BuiltinOp::Config,
        BuiltinOp::CompileLanguage,
        BuiltinOp::TargetProperty,
        BuiltinOp::TargetExists,
        BuiltinOp::TargetNameIfExists,
        BuiltinOp::TargetObjects,
        BuiltinOp::BuildInterface,
        BuiltinOp::InstallInterface,
        BuiltinOp::CompileFeatures,
    ];

    pub fn from_name(name: &str) -> Option<BuiltinOp> {
        let op = match name {
            "0" => BuiltinOp::Zero,
            "1" => BuiltinOp::One,
            "BOOL" => BuiltinOp::Bool,
            "AND" => BuiltinOp::And,
            "OR" => BuiltinOp::Or,
            "NOT" => BuiltinOp::Not,
            "IF" => BuiltinOp::If,
            "STREQUAL" => BuiltinOp::StrEqual,
            "EQUAL" => BuiltinOp::Equal,
            "IN_LIST" => BuiltinOp::InList,
            "ANGLE-R" => BuiltinOp::AngleR,
            "COMMA" => BuiltinOp::Comma,
            "SEMICOLON" => BuiltinOp::Semicolon,
            "LOWER_CASE" => BuiltinOp::LowerCase,
            "UPPER_CASE" => BuiltinOp::UpperCase,
            "JOIN" => BuiltinOp::Join,
            "REMOVE_DUPLICATES" => BuiltinOp::RemoveDuplicates,
            "CONFIG" => BuiltinOp::Config,
            "COMPILE_LANGUAGE" => BuiltinOp::CompileLanguage,
            "TARGET_PROPERTY" => BuiltinOp::TargetProperty,
            "TARGET_EXISTS" => BuiltinOp::TargetExists,
            "TARGET_NAME_IF_EXISTS" => BuiltinOp::TargetNameIfExists,
            "TARGET_OBJECTS" => BuiltinOp::TargetObjects,
            "BUILD_INTERFACE" => BuiltinOp::BuildInterface,
            "INSTALL_INTERFACE" => BuiltinOp::InstallInterface,
            "COMPILE_FEATURES" => BuiltinOp::CompileFeatures,
            _ => return None,
        };
        Some(op)
    }

    /// Static definition for this operation.
    pub fn definition(self) -> &'static dyn OperationDefinition {
        match self {
            BuiltinOp::Zero => &ZERO,
            BuiltinOp::One => &ONE,
            BuiltinOp::Bool => &BOOL,
            BuiltinOp::And => &AND,
            BuiltinOp::Or => &OR,
            BuiltinOp::Not => &NOT,
            BuiltinOp::If => &IF,
            BuiltinOp::StrEqual => &STREQUAL,
            BuiltinOp::Equal => &EQUAL,
            BuiltinOp::InList => &IN_LIST,
            BuiltinOp::AngleR => &ANGLE_R,
            BuiltinOp::Comma => &COMMA,
            BuiltinOp::Semicolon => &SEMICOLON,
            BuiltinOp::LowerCase => &LOWER_CASE,
            BuiltinOp::UpperCase => &UPPER_CASE,
            BuiltinOp::Join => &JOIN,
            BuiltinOp::RemoveDuplicates => &REMOVE_DUPLICATES,
            BuiltinOp::Config => &CONFIG,
            BuiltinOp::CompileLanguage => &COMPILE_LANGUAGE,
            BuiltinOp::TargetProperty => &TARGET_PROPERTY,
            BuiltinOp::TargetExists => &TARGET_EXISTS,
            BuiltinOp::TargetNameIfExists => &TARGET_NAME_IF_EXISTS,
            BuiltinOp::TargetObjects => &TARGET_OBJECTS,
            BuiltinOp::BuildInterface => &BUILD_INTERFACE,
            BuiltinOp::InstallInterface => &INSTALL_INTERFACE,
            BuiltinOp::CompileFeatures => &COMPILE_FEATURES,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.definition().name()
    }
}

/// Why an extension could not be registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The name belongs to a built-in operation.
    BuiltinName(String),
    /// An extension with this name is already registered.
    Duplicate(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::BuiltinName(name) => {
                write!(f, "cannot register `{name}`: it is a built-in operation")
            }
            RegistryError::Duplicate(name) => {
                write!(f, "operation `{name}` is already registered")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Built-in operations plus host extensions.
///
/// Built-ins dispatch through [`BuiltinOp`] without hashing; only names
/// that are not built-in fall through to the extension map.
#[derive(Default)]
pub struct OperationRegistry {
    extensions: FxHashMap<String, Box<dyn OperationDefinition>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host operation. Built-in names cannot be overridden.
    pub fn register(&mut self, op: Box<dyn OperationDefinition>) -> Result<(), RegistryError> {
        let name = op.name();
        if BuiltinOp::from_name(name).is_some() {
            return Err(RegistryError::BuiltinName(name.to_string()));
        }
        if self.extensions.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.extensions.insert(name.to_string(), op);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn OperationDefinition> {
        match BuiltinOp::from_name(name) {
            Some(op) => Some(op.definition()),
            None => self.extensions.get(name).map(AsRef::as_ref),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All operation names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BuiltinOp::ALL
            .iter()
            .map(|op| op.name())
            .chain(self.extensions.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        BuiltinOp::ALL.len() + self.extensions.len()
    }

    /// Always false: built-ins are always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}
