// File: src/condition/parser.rs
// Purpose: Parse activation expressions such as `a && (b || !c)` into a tree

/// Parsed activation expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionNode {
    /// Reference to a named condition item
    Condition(String),
    Not(Box<ConditionNode>),
    And(Box<ConditionNode>, Box<ConditionNode>),
    Or(Box<ConditionNode>, Box<ConditionNode>),
}

impl ConditionNode {
    /// Names of every referenced condition, in order of appearance.
    pub fn condition_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            ConditionNode::Condition(name) => names.push(name),
            ConditionNode::Not(inner) => inner.collect_names(names),
            ConditionNode::And(left, right) | ConditionNode::Or(left, right) => {
                left.collect_names(names);
                right.collect_names(names);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "`{}`", name),
            Token::And => write!(f, "`&&`"),
            Token::Or => write!(f, "`||`"),
            Token::Not => write!(f, "`!`"),
            Token::LParen => write!(f, "`(`"),
            Token::RParen => write!(f, "`)`"),
        }
    }
}

/// Parses an activation expression.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// or      := and ( "||" and )*
/// and     := unary ( "&&" unary )*
/// unary   := "!" unary | primary
/// primary := IDENT | "(" or ")"
/// ```
pub fn parse(expression: &str) -> Result<ConditionNode, String> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err("empty expression".to_string());
    }

    let mut parser = Parser {
        tokens,
        position: 0,
        depth: 0,
    };
    let node = parser.parse_or()?;

    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(format!("unexpected {} after end of expression", token)),
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut chars = expression.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '!' => tokens.push(Token::Not),
            '&' | '|' => {
                if chars.next_if(|&(_, next)| next == c).is_none() {
                    return Err(format!("expected `{0}{0}` at position {1}", c, index));
                }
                tokens.push(if c == '&' { Token::And } else { Token::Or });
            }
            c if is_identifier_start(c) => {
                let mut name = String::from(c);
                while let Some((_, next)) = chars.next_if(|&(_, next)| is_identifier_part(next)) {
                    name.push(next);
                }
                tokens.push(Token::Ident(name));
            }
            other => {
                return Err(format!("unexpected character `{}` at position {}", other, index));
            }
        }
    }

    Ok(tokens)
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}

/// Deepest nesting of `!` and parentheses accepted in one expression.
const MAX_DEPTH: usize = 256;

struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        self.position += 1;
        token
    }

    fn parse_or(&mut self) -> Result<ConditionNode, String> {
        let mut node = self.parse_and()?;
        while self.peek() == Some(&Token::Or) {
            self.advance();
            let right = self.parse_and()?;
            node = ConditionNode::Or(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<ConditionNode, String> {
        let mut node = self.parse_unary()?;
        while self.peek() == Some(&Token::And) {
            self.advance();
            let right = self.parse_unary()?;
            node = ConditionNode::And(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    // Every nested `!` and `(` passes through here.
    fn parse_unary(&mut self) -> Result<ConditionNode, String> {
        if self.depth >= MAX_DEPTH {
            return Err("expression nested too deeply".to_string());
        }
        self.depth += 1;
        let node = self.parse_unary_inner();
        self.depth -= 1;
        node
    }

    fn parse_unary_inner(&mut self) -> Result<ConditionNode, String> {
        if self.peek() == Some(&Token::Not) {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(ConditionNode::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<ConditionNode, String> {
        match self.advance() {
            Some(Token::Ident(name)) => Ok(ConditionNode::Condition(name)),
            Some(Token::LParen) => {
                let node = self.parse_or()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(node),
                    Some(token) => Err(format!("expected `)`, found {}", token)),
                    None => Err("unbalanced parenthesis".to_string()),
                }
            }
            Some(token) => Err(format!("unexpected {}", token)),
            None => Err("unexpected end of expression".to_string()),
        }
    }
}
