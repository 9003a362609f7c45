mod common;

use common::*;
use issuer_contract::ContractError;
use issuer_types::{AllowancesResponse, ExecuteMsg, QueryMsg, Uint128};
use proptest::prelude::*;

fn owner_only_command() -> impl Strategy<Value = ExecuteMsg> {
    let target = "[a-z]{3}".prop_map(|s| format!("osmo1{s}"));
    prop_oneof![
        (target.clone(), any::<u64>()).prop_map(|(address, n)| ExecuteMsg::SetMinter {
            address,
            allowance: Uint128::from(n),
        }),
        (target.clone(), any::<u64>()).prop_map(|(address, n)| ExecuteMsg::SetBurner {
            address,
            allowance: Uint128::from(n),
        }),
        (target.clone(), any::<bool>())
            .prop_map(|(address, status)| ExecuteMsg::SetBlacklister { address, status }),
        (target.clone(), any::<bool>())
            .prop_map(|(address, status)| ExecuteMsg::SetFreezer { address, status }),
        target
            .clone()
            .prop_map(|new_owner| ExecuteMsg::ChangeContractOwner { new_owner }),
        target
            .clone()
            .prop_map(|new_admin| ExecuteMsg::ChangeTokenFactoryAdmin { new_admin }),
        (target.clone(), target, 1u64..=u64::MAX).prop_map(|(from_address, to_address, n)| {
            ExecuteMsg::ForceTransfer {
                amount: Uint128::from(n),
                from_address,
                to_address,
            }
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn property_mint_decrements_exactly(a in 1u128..=u64::MAX as u128, b_seed in any::<u128>()) {
        let b = b_seed % a + 1;
        let mut chain = setup();
        let denom = denom(&chain);
        set_minter(&mut chain, ALICE, a);

        mint(&mut chain, ALICE, BOB, b).unwrap();
        prop_assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(a - b));

        let before = chain.storage_snapshot();
        let err = mint(&mut chain, ALICE, BOB, a - b + 1).unwrap_err();
        let is_shortfall = matches!(err, ContractError::InsufficientAllowance { .. });
        prop_assert!(is_shortfall);
        prop_assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(a - b));
        prop_assert_eq!(chain.balance(BOB, &denom), Uint128::new(b));
        prop_assert_eq!(chain.storage_snapshot(), before);
    }

    #[test]
    fn property_ungranted_mint_never_moves_funds(amount in 1u128..=u128::MAX) {
        let mut chain = setup();
        let denom = denom(&chain);

        let err = mint(&mut chain, ALICE, ALICE, amount).unwrap_err();
        let is_denied = matches!(
            err,
            ContractError::InsufficientAllowance { .. } | ContractError::Unauthorized
        );
        prop_assert!(is_denied);
        prop_assert_eq!(chain.bank.supply(&denom), Uint128::zero());
    }

    #[test]
    fn property_non_owner_commands_leave_state_untouched(msg in owner_only_command()) {
        let mut chain = setup();
        let before = chain.storage_snapshot();

        let err = chain.execute(ALICE, msg).unwrap_err();
        let is_unauthorized = matches!(err, ContractError::Unauthorized);
        prop_assert!(is_unauthorized);
        prop_assert_eq!(chain.storage_snapshot(), before);
    }

    #[test]
    fn property_paging_has_no_gaps_or_overlap(
        names in proptest::collection::btree_set("[a-z]{3,8}", 1..25),
        limit in 1u32..8,
    ) {
        let mut chain = setup();
        for name in &names {
            set_burner(&mut chain, &format!("osmo1{name}"), 1);
        }

        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let res: AllowancesResponse = chain
                .query(QueryMsg::BurnAllowances {
                    start_after: cursor.clone(),
                    limit: Some(limit),
                })
                .unwrap();
            if res.allowances.is_empty() {
                break;
            }
            prop_assert!(res.allowances.len() <= limit as usize);
            cursor = res.allowances.last().map(|a| a.address.clone());
            seen.extend(res.allowances.into_iter().map(|a| a.address));
        }

        let expected: Vec<String> = names.iter().map(|n| format!("osmo1{n}")).collect();
        prop_assert_eq!(seen, expected);
    }
}
