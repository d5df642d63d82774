//! Chance card effect and deck integrity tests.

use monopoly_junior::cards::{FREE_JUMP_TARGET, PAID_JUMP_TARGET};
use monopoly_junior::{ChanceCard, Color, Game, GameBuilder, PlayerId, RulesConfig, Token, GO_POSITION};
use proptest::prelude::*;
use smallvec::smallvec;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn game(seed: u64) -> Game {
    Game::new(2, Some(seed)).unwrap()
}

/// Pull `card` out of the deck and resolve it for `player`.
fn resolve(game: &mut Game, player: PlayerId, card: &ChanceCard) {
    assert!(game.board_mut().deck.move_to_top(card), "card {card} not in deck");
    game.table().draw_chance_card(player);
}

/// Every card currently in the deck, the discard pile or a player's hand.
fn all_cards(game: &Game) -> Vec<ChanceCard> {
    let deck = &game.board().deck;
    let mut cards: Vec<ChanceCard> = deck
        .cards()
        .iter()
        .chain(deck.discarded())
        .chain(game.players().iter().flat_map(|p| p.held_cards.iter()))
        .cloned()
        .collect();
    cards.sort_by_key(|c| c.to_string());
    cards
}

fn full_set(game: &Game) -> Vec<ChanceCard> {
    let tokens: Vec<Token> = game.players().iter().map(|p| p.token).collect();
    let mut cards = ChanceCard::standard_set(&tokens, game.config());
    cards.sort_by_key(|c| c.to_string());
    cards
}

// =============================================================================
// Simple money and movement cards
// =============================================================================

/// Test that Get Out of Jail Free is kept, not discarded.
#[test]
fn test_get_out_of_jail_free_is_held() {
    let mut game = game(1);

    resolve(&mut game, P0, &ChanceCard::GetOutOfJailFree);

    assert!(game.players()[0].has_jail_card());
    assert!(game.board().deck.discarded().is_empty());
}

/// Test that Move to Go teleports to Go and pays the Go money.
#[test]
fn test_move_to_go() {
    let mut game = game(1);
    game.players_mut()[0].position = 14;

    resolve(&mut game, P0, &ChanceCard::MoveToGo);

    assert_eq!(game.players()[0].position, GO_POSITION);
    assert_eq!(game.players()[0].money, 22);
    assert_eq!(game.board().deck.discarded(), &[ChanceCard::MoveToGo]);
}

/// Test that Homework pays from the bank, clamped to its balance.
#[test]
fn test_homework() {
    let mut game = game(1);
    let card = ChanceCard::Homework { amount: 2 };

    resolve(&mut game, P0, &card);
    assert_eq!(game.players()[0].money, 22);

    let mut game = game_with_bank(1);
    resolve(&mut game, P0, &card);
    assert_eq!(game.players()[0].money, 21);
    assert_eq!(game.board().bank.money(), 0);
}

fn game_with_bank(left: i64) -> Game {
    let mut game = game(1);
    let available = game.board().bank.money();
    game.board_mut().bank.withdraw(available - left);
    game
}

/// Test that Sweets costs the drawer money paid into the bank.
#[test]
fn test_sweets() {
    let mut game = game(1);
    let bank_before = game.board().bank.money();

    resolve(&mut game, P0, &ChanceCard::Sweets { amount: 2 });

    assert_eq!(game.players()[0].money, 18);
    assert_eq!(game.board().bank.money(), bank_before + 2);
    assert!(!game.players()[0].game_over);
}

/// Test that Birthday collects from every other player.
#[test]
fn test_birthday() {
    let mut game = Game::new(4, Some(8)).unwrap();

    resolve(&mut game, PlayerId::new(2), &ChanceCard::Birthday);

    let money: Vec<i64> = game.players().iter().map(|p| p.money).collect();
    assert_eq!(money, vec![15, 15, 19, 15]);
}

/// Test that the free jump takes its place without payment.
#[test]
fn test_free_jump() {
    let mut game = game(1);
    let card = ChanceCard::Jump { position: FREE_JUMP_TARGET, free_of_charge: true };

    resolve(&mut game, P0, &card);

    assert_eq!(game.players()[0].position, FREE_JUMP_TARGET);
    assert_eq!(game.board().place(FREE_JUMP_TARGET).unwrap().owner, Some(P0));
    assert_eq!(game.players()[0].money, 20);
}

/// Test that the paid jump buys at full price and does not pass Go.
#[test]
fn test_paid_jump() {
    let mut game = game(1);
    game.players_mut()[0].position = 20;
    let card = ChanceCard::Jump { position: PAID_JUMP_TARGET, free_of_charge: false };

    resolve(&mut game, P0, &card);

    assert_eq!(game.players()[0].position, PAID_JUMP_TARGET);
    assert_eq!(game.board().place(PAID_JUMP_TARGET).unwrap().owner, Some(P0));
    assert_eq!(game.players()[0].money, 15);
}

/// Test that Move up to X fields moves at most X spaces from the start.
#[test]
fn test_move_up_to_x_fields() {
    for seed in 0..20 {
        let mut game = game(seed);
        // Own everything in reach so the landing is quiet
        for position in [1, 2, 4, 5] {
            game.board_mut().place_mut(position).unwrap().owner = Some(P0);
        }
        game.board_mut().deck.move_to_top(&ChanceCard::Birthday);
        let card = ChanceCard::MoveUpToXFields { fields: 5 };

        resolve(&mut game, P0, &card);

        let position = game.players()[0].position;
        assert!(position <= 5, "moved to {position}");
        assert!(game.board().deck.discarded().contains(&card));
    }
}

// =============================================================================
// Choose cards
// =============================================================================

/// Test that Choose Color picks an unowned affordable place of the named
/// colors and takes it for free.
#[test]
fn test_choose_color_prefers_free_place() {
    let mut game = game(1);
    game.board_mut().place_mut(22).unwrap().owner = Some(P1);
    let card = ChanceCard::ChooseColor { colors: smallvec![Color::Pink, Color::Blue] };

    resolve(&mut game, P0, &card);

    let position = game.players()[0].position;
    assert!([7, 8, 23].contains(&position));
    assert_eq!(game.board().place(position).unwrap().owner, Some(P0));
    assert_eq!(game.players()[0].money, 20);
}

/// Test that Choose Color falls back to the player's own place when nothing
/// is free.
#[test]
fn test_choose_color_falls_back_to_own_place() {
    let mut game = game(1);
    game.board_mut().place_mut(4).unwrap().owner = Some(P1);
    game.board_mut().place_mut(5).unwrap().owner = Some(P0);

    resolve(&mut game, P0, &ChanceCard::ChooseColor { colors: smallvec![Color::LightBlue] });

    assert_eq!(game.players()[0].position, 5);
    assert_eq!(game.players()[0].money, 20);
}

/// Test that Choose Color onto someone else's place still charges rent.
#[test]
fn test_choose_color_pays_rent_when_forced() {
    let mut game = game(1);
    game.board_mut().place_mut(10).unwrap().owner = Some(P1);
    game.board_mut().place_mut(11).unwrap().owner = Some(P1);

    resolve(&mut game, P0, &ChanceCard::ChooseColor { colors: smallvec![Color::Orange] });

    assert!([10, 11].contains(&game.players()[0].position));
    assert_eq!(game.players()[0].money, 16);
    assert_eq!(game.players()[1].money, 24);
}

/// Test that a jump card is handed to its token's owner and the drawer
/// draws exactly one replacement card.
#[test]
fn test_choose_jump_hands_over_and_redraws() {
    let mut game = game(1);
    let holder_token = game.players()[1].token;
    let jump = ChanceCard::ChooseJump { token: holder_token };
    let homework = ChanceCard::Homework { amount: 2 };

    game.board_mut().deck.move_to_top(&homework);
    game.board_mut().deck.move_to_top(&jump);
    let deck_before = game.board().deck.len();

    game.table().draw_chance_card(P0);

    assert_eq!(game.board().deck.len(), deck_before - 2);
    assert_eq!(game.players()[1].held_cards.as_slice(), &[jump]);
    assert_eq!(game.board().deck.discarded(), &[homework]);
    assert_eq!(game.players()[0].money, 22);
}

/// Test that drawing your own jump card keeps it and still redraws.
#[test]
fn test_choose_jump_own_token() {
    let mut game = game(2);
    let own = ChanceCard::ChooseJump { token: game.players()[0].token };
    game.board_mut().deck.move_to_top(&ChanceCard::Birthday);
    game.board_mut().deck.move_to_top(&own);

    game.table().draw_chance_card(P0);

    assert_eq!(game.players()[0].held_cards.as_slice(), &[own]);
    assert_eq!(game.players()[0].money, 21);
    assert_eq!(game.players()[1].money, 19);
}

/// Test that a held jump card moves its holder to a chosen place, paying
/// as usual, and is then discarded.
#[test]
fn test_play_chosen_jump() {
    let mut game = game(3);
    let card = ChanceCard::ChooseJump { token: game.players()[0].token };
    assert!(game.board_mut().deck.move_to_top(&card));
    let card = game.board_mut().deck.draw(&mut monopoly_junior::GameRng::new(0)).unwrap();

    game.table().play_chosen_jump(P0, card.clone());

    let position = game.players()[0].position;
    let place = game.board().place(position).expect("jump lands on a place");
    assert_eq!(place.owner, Some(P0));
    assert_eq!(game.players()[0].money, 20 - place.price);
    assert_eq!(game.board().deck.discarded(), &[card]);
}

/// Test that the move-one-or-chance card draws at most one further card.
#[test]
fn test_move_one_or_chance_cascades_once() {
    for seed in 0..20 {
        let mut game = game(seed);
        game.board_mut().place_mut(1).unwrap().owner = Some(P0);
        let homework = ChanceCard::Homework { amount: 2 };
        game.board_mut().deck.move_to_top(&homework);
        game.board_mut().deck.move_to_top(&ChanceCard::MoveOneOrChance);
        let deck_before = game.board().deck.len();

        game.table().draw_chance_card(P0);

        let drawn = deck_before - game.board().deck.len();
        let player = &game.players()[0];
        if player.position == 1 {
            assert_eq!(drawn, 1);
            assert_eq!(player.money, 20);
        } else {
            assert_eq!(drawn, 2);
            assert_eq!(player.money, 22);
            // The cascaded card resolves before its parent is discarded
            assert_eq!(
                game.board().deck.discarded(),
                &[homework, ChanceCard::MoveOneOrChance]
            );
        }
    }
}

// =============================================================================
// Deck integrity
// =============================================================================

/// Test that drawing the whole deck shows every card once before a reshuffle.
#[test]
fn test_deck_cycle_without_replacement() {
    let mut game = game(5);
    let size = game.board().deck.len();
    let mut rng = monopoly_junior::GameRng::new(99);

    let mut seen = Vec::new();
    for _ in 0..size {
        let card = game.board_mut().deck.draw(&mut rng).unwrap();
        seen.push(card.clone());
        game.board_mut().deck.discard(card);
    }
    assert_eq!(game.board().deck.reshuffles(), 0);

    seen.sort_by_key(|c| c.to_string());
    assert_eq!(seen, full_set(&game));

    game.board_mut().deck.draw(&mut rng).unwrap();
    assert_eq!(game.board().deck.reshuffles(), 1);
}

/// Test that deck size depends on the number of seated players.
#[test]
fn test_deck_size_by_player_count() {
    for count in 2..=4 {
        let game = GameBuilder::new().player_count(count).seed(1).build().unwrap();
        assert_eq!(game.board().deck.len(), 15 + count);
    }
}

proptest! {
    /// Cards are never duplicated or lost, turn after turn.
    #[test]
    fn prop_deck_integrity(seed in any::<u64>(), turns in 1usize..200) {
        let mut game = GameBuilder::new()
            .player_count(3)
            .seed(seed)
            .config(RulesConfig::default().with_bank_money(1000))
            .build()
            .unwrap();
        let expected = full_set(&game);

        for turn in 0..turns {
            let seat = PlayerId::new((turn % 3) as u8);
            if game.take_turn(seat) {
                break;
            }
            prop_assert_eq!(all_cards(&game), expected.clone());
        }
    }
}
