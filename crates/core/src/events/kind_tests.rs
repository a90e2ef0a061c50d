// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testing::{Token, TokenKind};
use yare::parameterized;

fn circle() -> Token {
    Token::Circle(1.0)
}

fn square() -> Token {
    Token::Square(2.0)
}

fn text() -> Token {
    Token::Text("hi".to_string())
}

#[parameterized(
    bare_no_args = { vec![], vec![], Admission::Bare },
    bare_ignores_args = { vec![], vec![circle(), text()], Admission::Bare },
    exact_kind = { vec![TokenKind::Circle], vec![circle()], Admission::Full },
    supertype_takes_subtype = { vec![TokenKind::Shape], vec![square()], Admission::Full },
    any_takes_text = { vec![TokenKind::Any], vec![text()], Admission::Full },
    unrelated_kind = { vec![TokenKind::Circle], vec![text()], Admission::Rejected },
    sibling_kind = { vec![TokenKind::Circle], vec![square()], Admission::Rejected },
    too_many_args = { vec![TokenKind::Circle], vec![circle(), text()], Admission::Rejected },
    too_few_args = { vec![TokenKind::Shape, TokenKind::Text], vec![circle()], Admission::Rejected },
    no_args_for_param = { vec![TokenKind::Any], vec![], Admission::Rejected },
    second_position_fails = { vec![TokenKind::Shape, TokenKind::Text], vec![circle(), square()], Admission::Rejected },
    two_positions_match = { vec![TokenKind::Shape, TokenKind::Text], vec![square(), text()], Admission::Full },
)]
fn shape_admission(kinds: Vec<TokenKind>, args: Vec<Token>, expected: Admission) {
    let shape = Shape::new(kinds);
    assert_eq!(shape.admit(&args), expected);
}

#[test]
fn subtype_does_not_accept_supertype() {
    assert!(TokenKind::Shape.accepts(TokenKind::Circle));
    assert!(!TokenKind::Circle.accepts(TokenKind::Shape));
}

#[test]
fn shape_from_array_keeps_order() {
    let shape: Shape<TokenKind> = [TokenKind::Text, TokenKind::Circle].into();
    assert_eq!(shape.arity(), 2);
    assert_eq!(shape.kinds(), &[TokenKind::Text, TokenKind::Circle]);
    assert_eq!(Shape::<TokenKind>::bare().arity(), 0);
}
