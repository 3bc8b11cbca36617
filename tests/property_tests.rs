//! Property tests for the deck cycle invariants.

use proptest::prelude::*;

use civdeck::{CardId, DeckCycle, GameRng, InstanceAllocator};

const CURSE: CardId = CardId::new(99);

/// Operations a game can perform on the cycle, with enough variety to
/// shake out pile-accounting mistakes.
#[derive(Clone, Copy, Debug)]
enum Op {
    Draw(usize),
    DiscardHand,
    PlayFirstToDiscard,
    Inject(usize),
    RemoveFirst,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..6usize).prop_map(Op::Draw),
        Just(Op::DiscardHand),
        Just(Op::PlayFirstToDiscard),
        (1..4usize).prop_map(Op::Inject),
        Just(Op::RemoveFirst),
    ]
}

proptest! {
    /// Deck closure: the three piles always hold exactly the cards ever
    /// instantiated into the cycle minus the cards explicitly removed.
    #[test]
    fn deck_closure_under_random_ops(
        seed in any::<u64>(),
        initial in 1..30u32,
        ops in proptest::collection::vec(op_strategy(), 1..60),
    ) {
        let mut rng = GameRng::new(seed);
        let mut alloc = InstanceAllocator::new();
        let cards = (0..initial).map(|i| alloc.instantiate(CardId::new(i))).collect();
        let mut deck = DeckCycle::from_instances(cards, &mut rng);

        let mut expected = initial as usize;

        for op in ops {
            match op {
                Op::Draw(n) => {
                    deck.draw(n, &mut rng);
                }
                Op::DiscardHand => {
                    deck.discard_hand();
                }
                Op::PlayFirstToDiscard => {
                    if let Some(card) = deck.hand().first().copied() {
                        let played = deck.play_from_hand(card.instance_id).unwrap();
                        deck.discard(played);
                    }
                }
                Op::Inject(n) => {
                    deck.inject_curse(CURSE, n, &mut alloc, &mut rng);
                    expected += n;
                }
                Op::RemoveFirst => {
                    let first = deck.iter_all().next().copied();
                    if let Some(card) = first {
                        deck.remove_permanently(card.instance_id).unwrap();
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(deck.total_len(), expected);
        }
    }

    /// Reshuffling never invents or loses cards: drawing through an
    /// empty draw pile empties the discard pile and preserves the
    /// instance multiset.
    #[test]
    fn reshuffle_preserves_multiset(
        seed in any::<u64>(),
        count in 1..25u32,
    ) {
        let mut rng = GameRng::new(seed);
        let mut alloc = InstanceAllocator::new();
        let cards = (0..count).map(|i| alloc.instantiate(CardId::new(i))).collect();
        let mut deck = DeckCycle::from_instances(cards, &mut rng);

        // Cycle everything into the discard pile.
        deck.draw(count as usize, &mut rng);
        deck.discard_hand();
        let mut before: Vec<u32> = deck.iter_all().map(|c| c.instance_id.raw()).collect();

        // One draw forces the reshuffle.
        let outcome = deck.draw(1, &mut rng);

        prop_assert!(outcome.reshuffled);
        prop_assert_eq!(outcome.drawn, 1);
        prop_assert_eq!(deck.discard_pile_len(), 0);
        prop_assert_eq!(deck.draw_pile_len(), count as usize - 1);

        let mut after: Vec<u32> = deck.iter_all().map(|c| c.instance_id.raw()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Drawing from a fully exhausted cycle yields fewer cards, never
    /// an error or phantom cards.
    #[test]
    fn exhausted_draw_is_quiet(
        seed in any::<u64>(),
        count in 0..10u32,
        requested in 0..20usize,
    ) {
        let mut rng = GameRng::new(seed);
        let mut alloc = InstanceAllocator::new();
        let cards = (0..count).map(|i| alloc.instantiate(CardId::new(i))).collect();
        let mut deck = DeckCycle::from_instances(cards, &mut rng);

        let outcome = deck.draw(requested, &mut rng);

        prop_assert_eq!(outcome.drawn, requested.min(count as usize));
        prop_assert_eq!(deck.hand().len(), outcome.drawn);
        prop_assert_eq!(deck.total_len(), count as usize);
    }
}
