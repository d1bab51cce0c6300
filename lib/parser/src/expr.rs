use std::{
    fmt::{self, Debug, Display, Formatter},
    mem,
};

use scanner::TokenKind;

/// Parsed expression tree.
///
/// Operator chains such as `1+1+...+1` nest as deep as they are long, so every
/// walk over the tree (printing, comparing, dropping) uses an explicit stack.
pub enum Expr {
    Literal(f64),
    Binary { operator: BinaryOperator, left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary { operator, left: Box::new(left), right: Box::new(right) }
    }
}

enum Print<'e> {
    Expr(&'e Expr),
    Text(&'static str),
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Print::Expr(self)];

        while let Some(item) = stack.pop() {
            match item {
                Print::Text(text) => f.write_str(text)?,
                Print::Expr(Expr::Literal(value)) => write!(f, "{}", value)?,
                Print::Expr(Expr::Binary { operator, left, right }) => {
                    write!(f, "({} ", operator)?;
                    stack.extend([
                        Print::Text(")"),
                        Print::Expr(right),
                        Print::Text(" "),
                        Print::Expr(left),
                    ]);
                }
            }
        }
        Ok(())
    }
}

// Same S-expression form, so assertion failures stay readable.
impl Debug for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some(pair) = stack.pop() {
            match pair {
                (Expr::Literal(a), Expr::Literal(b)) if a == b => {}
                (
                    Expr::Binary { operator: op_a, left: left_a, right: right_a },
                    Expr::Binary { operator: op_b, left: left_b, right: right_b },
                ) if op_a == op_b => {
                    stack.push((&**right_a, &**right_b));
                    stack.push((&**left_a, &**left_b));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        fn detach(child: &mut Box<Expr>, stack: &mut Vec<Expr>) {
            if let Expr::Binary { .. } = **child {
                stack.push(mem::replace(&mut **child, Expr::Literal(0.0)));
            }
        }

        let mut stack = Vec::new();

        if let Expr::Binary { left, right, .. } = self {
            detach(left, &mut stack);
            detach(right, &mut stack);
        }

        // Each popped node only has literal children left when it is dropped.
        while let Some(mut expr) = stack.pop() {
            if let Expr::Binary { left, right, .. } = &mut expr {
                detach(left, &mut stack);
                detach(right, &mut stack);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Plus => Ok(BinaryOperator::Add),
            TokenKind::Minus => Ok(BinaryOperator::Sub),
            TokenKind::Star => Ok(BinaryOperator::Mul),
            TokenKind::Slash => Ok(BinaryOperator::Div),
            TokenKind::Percent => Ok(BinaryOperator::Rem),
            kind => Err(kind),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BinaryOperator::Add => "+",
                BinaryOperator::Sub => "-",
                BinaryOperator::Mul => "*",
                BinaryOperator::Div => "/",
                BinaryOperator::Rem => "%",
            }
        )
    }
}
