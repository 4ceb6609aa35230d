use crate::util::num::format_number;

/// An abstract syntax tree (AST) node representing one parsed statement.
///
/// `Expr` covers every construct the grammar can produce: numeric literals,
/// variable references, unary and binary operations, and assignments. Each
/// variant owns its children exclusively (a strict tree, no sharing) and
/// carries the byte offset of the token that introduced it for error
/// reporting. Once built, a node's shape never changes; all mutation happens
/// through the variable store during evaluation, never through the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. The lexer's integer/real distinction is already
    /// collapsed into a single floating value at this point.
    Literal {
        /// The literal value.
        value: f64,
        /// Byte offset in the source line.
        pos:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Byte offset in the source line.
        pos:  usize,
    },
    /// A unary operation (e.g. `-x` or `~x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Byte offset in the source line.
        pos:  usize,
    },
    /// A binary operation (arithmetic, power, bitwise or shift).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset in the source line.
        pos:   usize,
    },
    /// An assignment binding a name to the value of an expression.
    Assignment {
        /// The name of the variable being assigned.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
        /// Byte offset in the source line.
        pos:   usize,
    },
}

impl Expr {
    /// Gets the byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use bitcalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::UnaryOp { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::Assignment { pos, .. } => *pos,
        }
    }
}

/// Renders the canonical, fully parenthesized form of the tree.
///
/// Every operation prints with explicit parentheses, so the output is
/// unambiguous regardless of precedence: `"(left OP right)"` for binary
/// operations, `"(OPoperand)"` for unary operations and `"(name = expr)"`
/// for assignments. Literals print with up to six fractional digits,
/// trailing zeros and a trailing decimal point stripped.
///
/// Rendering is total; it never fails. Re-lexing and re-parsing a rendered
/// tree yields a tree that evaluates identically.
///
/// ## Example
/// ```
/// use bitcalc::parse_line;
///
/// let expr = parse_line("2 + 3 * 4").unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{}", format_number(*value)),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Assignment { name, value, .. } => write!(f, "({name} = {value})"),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover arithmetic, the power operator, and the bitwise
/// and shift family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise AND (`&`)
    BitAnd,
    /// Bitwise OR (`|`)
    BitOr,
    /// Bitwise XOR (`^`)
    BitXor,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, Pow, Shl, Shr, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
///
/// Unary operators are the prefix `+`, `-` and `~`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`).
    BitNot,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}
