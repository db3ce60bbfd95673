use bufflex::{LexedToken, Lexer, Position, Span, Step, TokenType, WHITESPACE};
use bufflex_test_utils::*;

const BASIC: TokenType = TokenType::new(0);

const TEMPLATE: &str = "this has a {{template}} of ${.somesort} in it!  ";
const TEMPLATE_WITH_COMMENTS: &str = "this has a {{//template}} of ${.somesort //} in it!  ";

mod capture_until {
    use super::*;
    use test_case::test_case;

    #[test_case("some text!", true, "!", "sometext"; "skipping whitespace")]
    #[test_case("some text!", false, "!", "some text"; "including whitespace")]
    #[test_case("some text!", true, "?", "sometext!"; "terminator not found")]
    #[test_case("a\tb\nc;", true, ";", "abc"; "mixed whitespace")]
    #[test_case("x => y", false, "=>", "x "; "multi symbol terminator")]
    #[test_case("日本語!", false, "!", "日本語"; "multi byte symbols")]
    fn single_terminator(input: &str, skip_whitespace: bool, terminator: &str, expected: &str) {
        let buffered = buffered_after(input, |lexer| {
            lexer.capture_until(skip_whitespace, terminator);
        });
        assert_eq!(buffered, expected);
    }

    #[test]
    fn one_of() {
        let buffered = buffered_after("some #text!", |lexer| {
            assert_eq!(lexer.capture_until_one_of(true, &["#", "!"]), Some("#"));
        });
        assert_eq!(buffered, "some");
    }

    #[test]
    fn whitespace_terminators() {
        let buffered = buffered_after("#unicorns\tyup", |lexer| {
            assert_eq!(lexer.capture_until_one_of(false, &WHITESPACE), Some("\t"));
        });
        assert_eq!(buffered, "#unicorns");
    }

    #[test]
    fn consecutive_captures_accumulate() {
        let buffered = buffered_after("a,b;c", |lexer| {
            assert!(lexer.capture_until(false, ","));
            assert!(lexer.skip_current_token(false));
            assert!(lexer.capture_until(false, ";"));
        });
        assert_eq!(buffered, "ab");
    }
}

mod consume_and_skip {
    use super::*;
    use test_case::test_case;

    #[test_case(true, true, "#"; "consume with new buffer")]
    #[test_case(true, false, "some#"; "consume with previous buffer")]
    #[test_case(false, true, ""; "skip with new buffer")]
    #[test_case(false, false, "some"; "skip with previous buffer")]
    fn after_capture(consume: bool, clear_previous: bool, expected: &str) {
        let buffered = buffered_after("some #text", |lexer| {
            assert!(lexer.capture_until(true, "#"));
            if consume {
                assert!(lexer.consume_current_token(clear_previous));
            } else {
                assert!(lexer.skip_current_token(clear_previous));
            }
        });
        assert_eq!(buffered, expected);
    }

    #[test]
    fn blank_token() {
        let mut lexer: Lexer = idle_lexer(TEMPLATE);
        assert!(!lexer.consume_current_token(false));
        assert!(!lexer.skip_current_token(false));
    }

    #[test]
    fn consume_multi_symbol_token() {
        let lexer = Lexer::new("simple", TEMPLATE, |lexer: &mut Lexer| {
            lexer.capture_until(true, "{{");
            lexer.consume_current_token(true);
            lexer.emit(BASIC);
            None
        });
        check_lexer_output(lexer, &[(BASIC, "{{")]);
    }

    #[test]
    fn consume_skips_trailing_ignores() {
        let mut lexer = Lexer::new("simple", TEMPLATE_WITH_COMMENTS, |lexer: &mut Lexer| {
            lexer.capture_until(true, "{{");
            lexer.consume_current_token(true);
            lexer.emit(BASIC);
            None
        });
        lexer.add_ignore_tokens(["//"]);
        check_lexer_output(lexer, &[(BASIC, "{{")]);
    }

    #[test]
    fn skip_multi_symbol_token() {
        let lexer = Lexer::new("simple", TEMPLATE, |lexer: &mut Lexer| {
            lexer.capture_until(true, "{{");
            lexer.skip_current_token(true);
            lexer.emit(BASIC);
            None
        });
        check_lexer_output(lexer, &[(BASIC, "")]);
    }
}

mod capture_identifier {
    use super::*;

    #[test]
    fn first_identifier() {
        let buffered = buffered_after("some text!", |lexer| {
            assert!(lexer.capture_identifier());
        });
        assert_eq!(buffered, "some");
    }

    #[test]
    fn identifier_in_template() {
        let lexer = Lexer::new("simple", TEMPLATE, |lexer: &mut Lexer| {
            lexer.capture_until(true, "{{");
            lexer.skip_current_token(true);
            lexer.capture_identifier();
            lexer.emit(BASIC);
            None
        });
        check_lexer_output(lexer, &[(BASIC, "template")]);
    }

    #[test]
    fn ignores_added_during_lexing() {
        let lexer = Lexer::new("simple", TEMPLATE_WITH_COMMENTS, |lexer: &mut Lexer| {
            lexer.capture_until(true, "$");
            lexer.skip_current_token(true);
            lexer.add_ignore_tokens(["{.", "//"]);
            lexer.capture_identifier();
            lexer.emit(BASIC);
            None
        });
        check_lexer_output(lexer, &[(BASIC, "somesort")]);
    }

    #[test]
    fn closing_braces_follow_the_identifier() {
        const TOO_FAR: TokenType = TokenType::new(1);

        let lexer = Lexer::new("simple", TEMPLATE, |lexer: &mut Lexer| {
            lexer.capture_until(true, "{{");
            lexer.skip_current_token(true);
            lexer.capture_identifier();
            lexer.emit(BASIC);

            assert!(lexer.capture_until(true, "}}"));
            assert!(lexer.current_token_is("}}"));
            assert_eq!(lexer.current_token_is_one_of(&["", "}}"]), Some("}}"));
            if lexer.current_token_is_one_of(&["}}}"]).is_none() {
                lexer.emit_token(LexedToken::new(TOO_FAR, "toofar", Span::default()));
            }
            None
        });
        check_lexer_output(lexer, &[(BASIC, "template"), (TOO_FAR, "toofar")]);
    }
}

mod ignores {
    use super::*;

    const IGNORE_INPUT: &str = "I love *unicorns!";
    const COMMENTED_INPUT: &str = "
    /*
        I love
    */

    //unicorns!";

    #[test]
    fn ignored_literal() {
        let buffered = buffered_after(IGNORE_INPUT, |lexer| {
            lexer.add_ignore_tokens(["*"]);
            lexer.capture_until(false, "!");
        });
        assert_eq!(buffered, "I love unicorns");
    }

    #[test]
    fn removed_literal() {
        let buffered = buffered_after(IGNORE_INPUT, |lexer| {
            lexer.add_ignore_tokens(["*"]);
            lexer.remove_ignore_tokens(["*"]);
            lexer.capture_until(false, "!");
        });
        assert_eq!(buffered, "I love *unicorns");
    }

    #[test]
    fn comment_markers() {
        let buffered = buffered_after(COMMENTED_INPUT, |lexer| {
            lexer.add_ignore_tokens(["/*", "*/", "//"]);
            lexer.capture_until(true, "!");
        });
        assert_eq!(buffered, "Iloveunicorns");
    }

    #[test]
    fn ignored_literals_never_match_as_terminators() {
        let buffered = buffered_after("a*b*c!", |lexer| {
            lexer.add_ignore_tokens(["*"]);
            assert!(!lexer.capture_until(false, "*"));
        });
        assert_eq!(buffered, "abc!");
    }

    #[test]
    fn longer_literals_take_precedence() {
        let buffered = buffered_after("a/*b!", |lexer| {
            lexer.add_ignore_tokens(["/", "/*"]);
            lexer.capture_until(true, "!");
        });
        assert_eq!(buffered, "ab");
    }

    #[test]
    fn ignores_toggled_between_steps() {
        const WORD: TokenType = TokenType::new(1);

        fn ignoring(lexer: &mut Lexer) -> Option<Step> {
            lexer.add_ignore_tokens(["-"]);
            lexer.capture_until(true, ";");
            lexer.emit(WORD);
            lexer.skip_current_token(true);
            Some(Step::new(not_ignoring))
        }

        fn not_ignoring(lexer: &mut Lexer) -> Option<Step> {
            lexer.remove_ignore_tokens(["-"]);
            lexer.capture_until(true, ";");
            lexer.emit(WORD);
            None
        }

        let lexer = Lexer::new("toggled", "a-b; c-d;", ignoring);
        check_lexer_values(lexer, &["ab", "c-d"]);
    }
}

mod hashtags {
    use super::*;
    use test_case::test_case;

    const HASHTAG: TokenType = TokenType::new(1);

    fn hashtag_until_whitespace(lexer: &mut Lexer) -> Option<Step> {
        if lexer.capture_until(true, "#") {
            lexer.consume_current_token(true);
            lexer.capture_until_one_of(false, &WHITESPACE);
            lexer.emit(HASHTAG);
        }
        None
    }

    fn hashtag_until_end(lexer: &mut Lexer) -> Option<Step> {
        if lexer.capture_until(true, "#") {
            lexer.consume_current_token(true);
            // The terminator never appears, so capturing runs to the end of the input
            assert_eq!(lexer.capture_until_one_of(false, &["}"]), None);
            assert!(lexer.is_end_of_input());
            lexer.emit(HASHTAG);
        }
        None
    }

    #[test_case("I love #unicorns yup"; "space")]
    #[test_case("I love #unicorns\tyup"; "tab")]
    #[test_case("I love #unicorns\n\tyup"; "newline")]
    #[test_case("I love #unicorns"; "end of input")]
    fn ended_by_whitespace(input: &str) {
        let lexer = Lexer::new("hashtags", input, hashtag_until_whitespace);
        check_lexer_output(lexer, &[(HASHTAG, "#unicorns")]);
    }

    #[test]
    fn ended_by_end_of_input() {
        let lexer = Lexer::new("hashtags", "I love #unicorns", hashtag_until_end);
        check_lexer_output(lexer, &[(HASHTAG, "#unicorns")]);
    }

    #[test]
    fn inside_comments() {
        let mut lexer = Lexer::new(
            "hashtags",
            "//\n\t// I love #unicorns\n\t// yup",
            |lexer: &mut Lexer| {
                if lexer.capture_until(true, "#") {
                    lexer.consume_current_token(true);
                    lexer.capture_until_one_of(true, &["yup"]);
                    lexer.emit(HASHTAG);
                }
                None
            },
        );
        lexer.add_ignore_tokens(["/*", "*/", "//"]);
        check_lexer_output(lexer, &[(HASHTAG, "#unicorns")]);
    }

    #[test]
    fn spans() {
        fn lex_hashtags(lexer: &mut Lexer) -> Option<Step> {
            if lexer.capture_until(true, "#") {
                lexer.consume_current_token(true);
                lexer.capture_until_one_of(false, &WHITESPACE);
                lexer.emit(HASHTAG);
                Some(Step::new(lex_hashtags))
            } else {
                None
            }
        }

        let lexer = Lexer::new("hashtags", "I like #unicorns\nand #cheese", lex_hashtags);
        let tokens = lexer.collect::<Vec<_>>();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, "#unicorns");
        assert_eq!(tokens[0].span.start, Position::new(0, 7));
        assert_eq!(tokens[0].span.end, Position::new(0, 16));
        assert_eq!(tokens[1].value, "#cheese");
        assert_eq!(tokens[1].span.start, Position::new(1, 4));
        assert_eq!(tokens[1].span.end, Position::new(1, 11));
    }
}

mod errors {
    use super::*;

    #[test]
    fn error_token() {
        let lexer = Lexer::new("simple", TEMPLATE, |lexer: &mut Lexer| {
            lexer.errorf(format_args!("error {}", "yup"))
        });
        check_lexer_output(lexer, &[(TokenType::ERROR, "error yup")]);
    }

    #[test]
    fn tokens_before_the_error_are_delivered() {
        let lexer = Lexer::new("simple", "a b", |lexer: &mut Lexer| {
            lexer.capture_identifier();
            lexer.emit(BASIC);
            lexer.errorf("stopping early")
        });
        check_lexer_output(
            lexer,
            &[(BASIC, "a"), (TokenType::ERROR, "stopping early")],
        );
    }

    #[test]
    fn tokenize_error() {
        let mut lexer = Lexer::new("braces", "{{ name }", |lexer: &mut Lexer| {
            lexer.capture_until(true, "{{");
            lexer.skip_current_token(true);
            lexer.capture_identifier();
            if lexer.capture_until(true, "}}") {
                None
            } else {
                lexer.errorf("missing '}}'")
            }
        });

        let error = lexer.tokenize().unwrap_err();
        assert_eq!(error.lexer, "braces");
        assert_eq!(error.to_string(), "braces - 1:10: missing '}}'");
    }
}
