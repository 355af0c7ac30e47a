//! Scenario Tests
//!
//! End-to-end behaviour of a deployed contract: deploy conditions,
//! minting, transfers, allowances and allocation, plus property tests for
//! supply conservation and authority enforcement.

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    const ONE: Amount = token::ONE;

    fn main1() -> Address {
        [1u8; 32]
    }

    fn user1() -> Address {
        [2u8; 32]
    }

    fn user2() -> Address {
        [3u8; 32]
    }

    fn user3() -> Address {
        [4u8; 32]
    }

    fn attacker1() -> Address {
        [5u8; 32]
    }

    fn attacker2() -> Address {
        [6u8; 32]
    }

    fn deploy() -> ActionPoints {
        ActionPoints::new(main1()).unwrap()
    }

    // ============================================================================
    // Deploy Conditions
    // ============================================================================

    #[test]
    fn test_has_correct_owner() {
        let ap = deploy();
        assert_eq!(ap.owner(), Some(main1()));
    }

    #[test]
    fn test_has_no_initial_supply() {
        let ap = deploy();
        assert_eq!(ap.total_supply(), 0);
        assert_eq!(ap.allocated_supply(), 0);
    }

    // ============================================================================
    // Minting
    // ============================================================================

    #[test]
    fn test_owner_can_directly_mint() {
        let mut ap = deploy();
        let before = ap.balance_of(&user1());
        assert_eq!(before, 0, "initial balance should be zero");

        // 5.4 AP
        let mint_amount = 54 * ONE / 10;
        let mut ctx = CallContext::new(main1());
        ap.direct_mint(&mut ctx, user1(), mint_amount).unwrap();

        assert_eq!(
            ctx.events.filter_by_type(EventType::Transfer),
            vec![&ApEvent::Transfer { from: ZERO_ADDRESS, to: user1(), value: mint_amount }]
        );
        assert_eq!(ap.balance_of(&user1()) - before, mint_amount, "Wrong amount received");
    }

    #[test]
    fn test_non_owner_cannot_mint() {
        let mut ap = deploy();
        assert_ne!(ap.owner(), Some(attacker1()), "Wrong starting owner");
        let hash_before = ap.state_hash();

        let mut ctx = CallContext::new(attacker1());
        let result = ap.direct_mint(&mut ctx, attacker2(), 1000 * ONE);

        assert_eq!(result, Err(ApError::Unauthorized { caller: attacker1() }));
        assert_eq!(ap.state_hash(), hash_before);
        assert!(ctx.events.is_empty());
    }

    // ============================================================================
    // Basic Token Functions
    // ============================================================================

    #[test]
    fn test_can_transfer() {
        let mut ap = deploy();
        let mut owner_ctx = CallContext::new(main1());
        ap.direct_mint(&mut owner_ctx, user1(), 8 * ONE).unwrap();

        let user1_before = ap.balance_of(&user1());
        let user2_before = ap.balance_of(&user2());
        let amount_to_send = 5 * ONE;

        let mut ctx = CallContext::new(user1());
        ap.transfer(&mut ctx, user2(), amount_to_send).unwrap();

        assert_eq!(
            ctx.events.events(),
            &[ApEvent::Transfer { from: user1(), to: user2(), value: amount_to_send }]
        );
        assert_eq!(user1_before - ap.balance_of(&user1()), amount_to_send, "invalid amount deducted");
        assert_eq!(ap.balance_of(&user2()) - user2_before, amount_to_send, "invalid amount received");
        assert_eq!(ap.total_supply(), 8 * ONE);
    }

    #[test]
    fn test_can_transfer_using_allowance() {
        let mut ap = deploy();
        let mint_amount = 8 * ONE;
        let mut owner_ctx = CallContext::new(main1());
        ap.direct_mint(&mut owner_ctx, user1(), mint_amount).unwrap();
        assert_eq!(ap.balance_of(&user1()), mint_amount);

        let transfer_amount = 3 * ONE;

        let mut user1_ctx = CallContext::new(user1());
        ap.approve(&mut user1_ctx, user2(), transfer_amount).unwrap();
        assert_eq!(
            user1_ctx.events.events(),
            &[ApEvent::Approval { owner: user1(), spender: user2(), value: transfer_amount }]
        );

        assert_eq!(ap.balance_of(&user3()), 0);

        let mut user2_ctx = CallContext::new(user2());
        ap.transfer_from(&mut user2_ctx, user1(), user3(), transfer_amount).unwrap();
        assert_eq!(
            user2_ctx.events.events(),
            &[ApEvent::Transfer { from: user1(), to: user3(), value: transfer_amount }]
        );

        assert_eq!(ap.balance_of(&user3()), transfer_amount, "User did not receive tokens");
        assert_eq!(
            ap.balance_of(&user1()),
            mint_amount - transfer_amount,
            "tokens deducted incorrectly"
        );
        assert_eq!(ap.allowance(&user1(), &user2()), 0);
    }

    // ============================================================================
    // Allocating Tokens
    // ============================================================================

    #[test]
    fn test_only_owner_can_allocate_new_supply() {
        let mut ap = deploy();
        let supply_to_allocate = 43 * ONE;

        let mut ctx = CallContext::new(main1());
        ap.allocate_coins(&mut ctx, supply_to_allocate).unwrap();
        assert_eq!(
            ctx.events.events(),
            &[ApEvent::APTokensAllocated { currently_allocated: supply_to_allocate }]
        );

        let before = ap.clone();
        let mut attacker_ctx = CallContext::new(attacker1());
        let result = ap.allocate_coins(&mut attacker_ctx, 10_000 * ONE);

        assert!(matches!(result, Err(ApError::Unauthorized { .. })));
        assert_eq!(ap, before);
        assert_eq!(ap.allocated_supply(), supply_to_allocate);
    }

    #[test]
    fn test_allocation_is_independent_of_supply() {
        let mut ap = deploy();
        let mut ctx = CallContext::new(main1());

        ap.allocate_coins(&mut ctx, 100 * ONE).unwrap();
        ap.direct_mint(&mut ctx, user1(), 10 * ONE).unwrap();

        assert_eq!(ap.allocated_supply(), 100 * ONE);
        assert_eq!(ap.total_supply(), 10 * ONE);
    }

    #[test]
    fn test_identical_call_sequences_are_deterministic() {
        let calls = [
            (main1(), Call::DirectMint { to: user1(), amount: 8 * ONE }),
            (user1(), Call::Approve { spender: user2(), amount: 3 * ONE }),
            (user2(), Call::TransferFrom { from: user1(), to: user3(), amount: 2 * ONE }),
            (main1(), Call::AllocateCoins { amount: 43 * ONE }),
            (attacker1(), Call::DirectMint { to: attacker1(), amount: ONE }),
        ];

        let mut a = deploy();
        let mut b = deploy();
        for (caller, call) in calls.iter() {
            let ra = execute(&mut a, *caller, call);
            let rb = execute(&mut b, *caller, call);
            assert_eq!(ra, rb);
        }

        assert_eq!(a.state_hash(), b.state_hash());
    }

    // ============================================================================
    // Property Tests
    // ============================================================================

    const ACCOUNTS: u8 = 5;

    fn account(index: u8) -> Address {
        // Index 0 maps to the deployer, so owner calls are reachable
        [index + 1; 32]
    }

    fn call_strategy() -> impl Strategy<Value = (u8, Call)> {
        let amount = 0..=10 * ONE;
        let idx = 0..ACCOUNTS;
        prop_oneof![
            (idx.clone(), idx.clone(), amount.clone())
                .prop_map(|(c, t, a)| (c, Call::Transfer { to: account(t), amount: a })),
            (idx.clone(), idx.clone(), amount.clone())
                .prop_map(|(c, s, a)| (c, Call::Approve { spender: account(s), amount: a })),
            (idx.clone(), idx.clone(), idx.clone(), amount.clone()).prop_map(|(c, f, t, a)| {
                (c, Call::TransferFrom { from: account(f), to: account(t), amount: a })
            }),
            (idx.clone(), idx.clone(), amount.clone())
                .prop_map(|(c, t, a)| (c, Call::DirectMint { to: account(t), amount: a })),
            (idx.clone(), amount.clone())
                .prop_map(|(c, a)| (c, Call::AllocateCoins { amount: a })),
            (idx.clone(), Just(ZERO_ADDRESS), amount)
                .prop_map(|(c, t, a)| (c, Call::Transfer { to: t, amount: a })),
        ]
    }

    proptest! {
        #[test]
        fn prop_supply_conserved(calls in prop::collection::vec(call_strategy(), 1..60)) {
            let mut ap = deploy();
            let mut allocated_sum: Amount = 0;
            let mut minted_sum: Amount = 0;

            for (caller, call) in calls {
                let allocated_before = ap.allocated_supply();
                let outcome = execute(&mut ap, account(caller), &call);

                match (&call, &outcome) {
                    (Call::AllocateCoins { amount }, Ok(_)) => allocated_sum += *amount,
                    (Call::DirectMint { amount, .. }, Ok(_)) => minted_sum += *amount,
                    _ => {}
                }

                prop_assert!(ap.check_invariants().is_ok());
                prop_assert!(ap.allocated_supply() >= allocated_before);
            }

            prop_assert_eq!(ap.allocated_supply(), allocated_sum);
            prop_assert_eq!(ap.total_supply(), minted_sum);
        }

        #[test]
        fn prop_non_owner_supply_calls_rejected(
            caller in 1..ACCOUNTS,
            to in 0..ACCOUNTS,
            amount in 0..=1_000 * ONE,
            allocate in any::<bool>(),
        ) {
            let mut ap = deploy();
            let mut owner_ctx = CallContext::new(main1());
            ap.direct_mint(&mut owner_ctx, user1(), 8 * ONE).unwrap();
            let hash_before = ap.state_hash();

            let call = if allocate {
                Call::AllocateCoins { amount }
            } else {
                Call::DirectMint { to: account(to), amount }
            };
            let result = execute(&mut ap, account(caller), &call);

            prop_assert_eq!(result, Err(ApError::Unauthorized { caller: account(caller) }));
            prop_assert_eq!(ap.state_hash(), hash_before);
        }

        #[test]
        fn prop_allowance_discipline(
            approved in 0..=10 * ONE,
            spend in 0..=10 * ONE,
        ) {
            let mut ap = deploy();
            let mut owner_ctx = CallContext::new(main1());
            ap.direct_mint(&mut owner_ctx, user1(), 10 * ONE).unwrap();

            let mut user1_ctx = CallContext::new(user1());
            ap.approve(&mut user1_ctx, user2(), approved).unwrap();

            let mut user2_ctx = CallContext::new(user2());
            let result = ap.transfer_from(&mut user2_ctx, user1(), user3(), spend);

            if spend <= approved {
                prop_assert!(result.is_ok());
                prop_assert_eq!(ap.allowance(&user1(), &user2()), approved - spend);
                prop_assert_eq!(ap.balance_of(&user3()), spend);
                prop_assert_eq!(ap.balance_of(&user1()), 10 * ONE - spend);
            } else {
                let is_insufficient_allowance =
                    matches!(result, Err(ApError::InsufficientAllowance { .. }));
                prop_assert!(is_insufficient_allowance);
                prop_assert_eq!(ap.allowance(&user1(), &user2()), approved);
                prop_assert_eq!(ap.balance_of(&user1()), 10 * ONE);
            }
        }
    }
}
