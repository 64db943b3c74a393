use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Syntax tree of the macro input
enum Tree {
    Ident(Ident),
    Name(syn::LitStr),
    Constant(bool),
    Not(Box<Tree>),
    And(Box<Tree>, Box<Tree>),
    Or(Box<Tree>, Box<Tree>),
}

impl Tree {
    /// Emit code building an `Expression`.
    ///
    /// Identifiers are borrowed, never moved: the combinators take `&self`
    /// and clone the subtrees they keep.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Tree::Ident(ident) => quote! { #ident },
            Tree::Name(lit) => quote! { Expression::variable(#lit) },
            Tree::Constant(value) => quote! { Expression::constant(#value) },
            Tree::Not(inner) => {
                let inner = inner.to_tokens();
                quote! { (&(#inner)).not() }
            }
            Tree::And(left, right) => {
                let left = left.to_tokens();
                let right = right.to_tokens();
                quote! { (&(#left)).and(&(#right)) }
            }
            Tree::Or(left, right) => {
                let left = left.to_tokens();
                let right = right.to_tokens();
                quote! { (&(#left)).or(&(#right)) }
            }
        }
    }
}

struct ExprInput {
    tree: Tree,
}

impl Parse for ExprInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let tree = Level::Or.parse(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected token after expression"));
        }
        Ok(ExprInput { tree })
    }
}

/// Binary precedence levels; `Or` binds loosest
#[derive(Clone, Copy)]
enum Level {
    Or,
    And,
}

impl Level {
    /// Left-associative chain of operands joined by this level's operator
    fn parse(self, input: ParseStream) -> Result<Tree> {
        let mut tree = self.operand(input)?;
        while self.eat_operator(input)? {
            let rhs = Box::new(self.operand(input)?);
            tree = match self {
                Level::Or => Tree::Or(Box::new(tree), rhs),
                Level::And => Tree::And(Box::new(tree), rhs),
            };
        }
        Ok(tree)
    }

    fn operand(self, input: ParseStream) -> Result<Tree> {
        match self {
            Level::Or => Level::And.parse(input),
            Level::And => parse_unary(input),
        }
    }

    /// `+`/`|` for OR, `*`/`&` for AND
    fn eat_operator(self, input: ParseStream) -> Result<bool> {
        let found = match self {
            Level::Or if input.peek(Token![+]) => input.parse::<Token![+]>().map(drop),
            Level::Or if input.peek(Token![|]) => input.parse::<Token![|]>().map(drop),
            Level::And if input.peek(Token![*]) => input.parse::<Token![*]>().map(drop),
            Level::And if input.peek(Token![&]) => input.parse::<Token![&]>().map(drop),
            _ => return Ok(false),
        };
        found.map(|()| true)
    }
}

fn parse_unary(input: ParseStream) -> Result<Tree> {
    let negated = if input.peek(Token![!]) {
        input.parse::<Token![!]>().map(drop)
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>().map(drop)
    } else {
        return parse_atom(input);
    };
    negated?;
    Ok(Tree::Not(Box::new(parse_unary(input)?)))
}

fn parse_atom(input: ParseStream) -> Result<Tree> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        Level::Or.parse(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        let name = lit.value();
        if ["NOT", "OR", "AND"]
            .iter()
            .any(|op| name.eq_ignore_ascii_case(op))
        {
            return Err(syn::Error::new(
                lit.span(),
                "operator tokens cannot be used as variable names",
            ));
        }
        Ok(Tree::Name(lit))
    } else if input.peek(syn::LitBool) {
        let lit: syn::LitBool = input.parse()?;
        Ok(Tree::Constant(lit.value))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        match lit.base10_parse::<u8>()? {
            0 => Ok(Tree::Constant(false)),
            1 => Ok(Tree::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Tree::Ident(ident))
    }
}

/// Build an `Expression` with infix syntax.
///
/// # Supported Syntax
///
/// - `a` - any `Expression` identifier in scope (borrowed, not moved)
/// - `"a"` - variable named `a` (`Expression::variable("a")`)
/// - `0` / `false`, `1` / `true` - constants
/// - `!a` or `~a` - NOT
/// - `a * b` or `a & b` - AND
/// - `a + b` or `a | b` - OR
/// - `(a + b) * c` - grouping
///
/// Precedence from highest to lowest: parentheses, NOT, AND, OR. Binary
/// operators associate to the left, so `"a" * "b" * "c"` builds
/// `And(And(a, b), c)`.
///
/// Reserved operator tokens (`"NOT"`, `"or"`, ...) are rejected at compile time.
///
/// # Examples
///
/// ```ignore
/// use boolexps::{expr, Expression};
///
/// let xor = expr!("a" * !"b" + !"a" * "b");
///
/// let p = Expression::variable("p");
/// let q = Expression::variable("q");
/// let implication = expr!(!p + q);
/// let tautology = expr!(implication + p);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as ExprInput);
    TokenStream::from(parsed.tree.to_tokens())
}
