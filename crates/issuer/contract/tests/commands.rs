mod common;

use common::*;
use issuer_contract::{ContractError, HostError, MockChain, Response};
use issuer_types::{
    Addr, DenomMetadata, DenomUnit, EventKind, ExecuteMsg, OwnerResponse, QueryMsg,
    StatusResponse, TokenFactoryAdminResponse, Uint128,
};

#[test]
fn mint_consumes_quota_and_rejects_overdraw() {
    let mut chain = setup();
    let denom = denom(&chain);
    set_minter(&mut chain, ALICE, 1000);

    let res = mint(&mut chain, ALICE, ALICE, 900).unwrap();
    assert_eq!(chain.balance(ALICE, &denom), Uint128::new(900));
    assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(100));

    let event = res.event("mint").unwrap();
    assert_eq!(event.actor, Addr::unchecked(ALICE));
    assert_eq!(
        event.kind,
        EventKind::Minted {
            to: Addr::unchecked(ALICE),
            amount: Uint128::new(900),
            remaining_allowance: Uint128::new(100),
        }
    );

    let before = chain.storage_snapshot();
    let err = mint(&mut chain, ALICE, ALICE, 900).unwrap_err();
    match err {
        ContractError::InsufficientAllowance {
            action,
            required,
            available,
        } => {
            assert_eq!(action, "mint");
            assert_eq!(required, Uint128::new(900));
            assert_eq!(available, Uint128::new(100));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(chain.balance(ALICE, &denom), Uint128::new(900));
    assert_eq!(chain.storage_snapshot(), before);
}

#[test]
fn owner_needs_an_explicit_mint_grant() {
    let mut chain = setup();
    let denom = denom(&chain);
    let before = chain.storage_snapshot();

    let err = mint(&mut chain, OWNER, OWNER, 1).unwrap_err();
    assert!(matches!(err, ContractError::InsufficientAllowance { .. }));
    assert_eq!(chain.bank.supply(&denom), Uint128::zero());
    assert_eq!(chain.storage_snapshot(), before);

    set_minter(&mut chain, OWNER, 5);
    assert!(mint(&mut chain, OWNER, BOB, 5).is_ok());
    assert_eq!(chain.balance(BOB, &denom), Uint128::new(5));
}

#[test]
fn revoked_minter_cannot_mint() {
    let mut chain = setup();
    set_minter(&mut chain, ALICE, 10);
    set_minter(&mut chain, ALICE, 0);

    let err = mint(&mut chain, ALICE, ALICE, 1).unwrap_err();
    assert!(matches!(err, ContractError::InsufficientAllowance { .. }));
}

#[test]
fn zero_amounts_are_rejected() {
    let mut chain = setup();
    set_minter(&mut chain, ALICE, 10);
    set_burner(&mut chain, ALICE, 10);

    assert!(matches!(
        mint(&mut chain, ALICE, ALICE, 0),
        Err(ContractError::ZeroAmount)
    ));
    assert!(matches!(
        chain.execute(
            ALICE,
            ExecuteMsg::Burn {
                amount: Uint128::zero()
            }
        ),
        Err(ContractError::ZeroAmount)
    ));
    assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(10));
}

#[test]
fn mint_to_malformed_address_is_invalid() {
    let mut chain = setup();
    set_minter(&mut chain, ALICE, 10);

    let err = mint(&mut chain, ALICE, "Osmo1Upper", 1).unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));
    assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(10));
}

#[test]
fn burn_reduces_own_balance_and_quota() {
    let mut chain = setup();
    let denom = denom(&chain);
    set_minter(&mut chain, ALICE, 500);
    mint(&mut chain, ALICE, ALICE, 500).unwrap();
    set_burner(&mut chain, ALICE, 300);

    let res = chain
        .execute(
            ALICE,
            ExecuteMsg::Burn {
                amount: Uint128::new(200),
            },
        )
        .unwrap();
    assert_eq!(
        res.events[0].kind,
        EventKind::Burned {
            from: Addr::unchecked(ALICE),
            amount: Uint128::new(200),
            remaining_allowance: Uint128::new(100),
        }
    );
    assert_eq!(chain.balance(ALICE, &denom), Uint128::new(300));
    assert_eq!(chain.bank.supply(&denom), Uint128::new(300));
    assert_eq!(burn_allowance(&chain, ALICE), Uint128::new(100));

    let err = chain
        .execute(
            ALICE,
            ExecuteMsg::Burn {
                amount: Uint128::new(200),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InsufficientAllowance { ref action, .. } if action == "burn"));
}

#[test]
fn failed_burn_keeps_quota() {
    let mut chain = setup();
    set_burner(&mut chain, BOB, 100);
    let before = chain.storage_snapshot();

    // BOB holds nothing, so the ledger refuses the burn
    let err = chain
        .execute(
            BOB,
            ExecuteMsg::Burn {
                amount: Uint128::new(50),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::Host(HostError::TokenFactory { .. })));
    assert_eq!(burn_allowance(&chain, BOB), Uint128::new(100));
    assert_eq!(chain.storage_snapshot(), before);
}

#[test]
fn failed_mint_keeps_quota() {
    let mut chain = setup();
    let denom = denom(&chain);
    set_minter(&mut chain, ALICE, 100);
    let before = chain.storage_snapshot();

    chain.bank.fail_next("ledger unavailable");
    let err = mint(&mut chain, ALICE, BOB, 60).unwrap_err();
    assert!(matches!(err, ContractError::Host(_)));
    assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(100));
    assert_eq!(chain.balance(BOB, &denom), Uint128::zero());
    assert_eq!(chain.storage_snapshot(), before);

    assert!(mint(&mut chain, ALICE, BOB, 60).is_ok());
    assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(40));
}

#[test]
fn only_owner_administers() {
    let mut chain = setup();
    let denom = denom(&chain);
    let before = chain.storage_snapshot();

    let attempts = vec![
        ExecuteMsg::SetMinter {
            address: ALICE.to_string(),
            allowance: Uint128::new(1),
        },
        ExecuteMsg::SetBurner {
            address: ALICE.to_string(),
            allowance: Uint128::new(1),
        },
        ExecuteMsg::SetBlacklister {
            address: ALICE.to_string(),
            status: true,
        },
        ExecuteMsg::SetFreezer {
            address: ALICE.to_string(),
            status: true,
        },
        ExecuteMsg::ChangeContractOwner {
            new_owner: ALICE.to_string(),
        },
        ExecuteMsg::ChangeTokenFactoryAdmin {
            new_admin: ALICE.to_string(),
        },
        ExecuteMsg::SetDenomMetadata {
            metadata: DenomMetadata {
                base: denom.clone(),
                ..DenomMetadata::default()
            },
        },
        ExecuteMsg::Blacklist {
            address: BOB.to_string(),
            status: true,
        },
        ExecuteMsg::Freeze { status: true },
        ExecuteMsg::ForceTransfer {
            amount: Uint128::new(1),
            from_address: BOB.to_string(),
            to_address: ALICE.to_string(),
        },
    ];

    for msg in attempts {
        let action = msg.action();
        let err = chain.execute(ALICE, msg).unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized), "{action}: {err}");
        assert_eq!(chain.storage_snapshot(), before, "{action} mutated state");
    }
    assert_eq!(chain.bank.admin_of(&denom), Some(chain.contract_addr()));
}

#[test]
fn role_holders_cannot_delegate_their_role() {
    let mut chain = setup();
    chain
        .execute(
            OWNER,
            ExecuteMsg::SetBlacklister {
                address: ALICE.to_string(),
                status: true,
            },
        )
        .unwrap();

    let err = chain
        .execute(
            ALICE,
            ExecuteMsg::SetBlacklister {
                address: BOB.to_string(),
                status: true,
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized));
}

#[test]
fn repeated_commands_are_idempotent() {
    let mut chain = setup();

    chain
        .execute(OWNER, ExecuteMsg::Freeze { status: true })
        .unwrap();
    let once = chain.storage_snapshot();
    chain
        .execute(OWNER, ExecuteMsg::Freeze { status: true })
        .unwrap();
    assert_eq!(chain.storage_snapshot(), once);

    let grant = ExecuteMsg::SetBlacklister {
        address: ALICE.to_string(),
        status: true,
    };
    chain.execute(OWNER, grant.clone()).unwrap();
    let once = chain.storage_snapshot();
    chain.execute(OWNER, grant).unwrap();
    assert_eq!(chain.storage_snapshot(), once);

    let status: StatusResponse = chain
        .query(QueryMsg::IsBlacklister {
            address: ALICE.to_string(),
        })
        .unwrap();
    assert!(status.status);
}

#[test]
fn ownership_transfer_moves_authority() {
    let mut chain = setup();
    let res = chain
        .execute(
            OWNER,
            ExecuteMsg::ChangeContractOwner {
                new_owner: ALICE.to_string(),
            },
        )
        .unwrap();
    assert_eq!(
        res.events[0].kind,
        EventKind::ContractOwnerChanged {
            previous_owner: Addr::unchecked(OWNER),
            new_owner: Addr::unchecked(ALICE),
        }
    );

    let owner: OwnerResponse = chain.query(QueryMsg::Owner {}).unwrap();
    assert_eq!(owner.address, ALICE);

    let grant = ExecuteMsg::SetMinter {
        address: BOB.to_string(),
        allowance: Uint128::new(10),
    };
    assert!(matches!(
        chain.execute(OWNER, grant.clone()),
        Err(ContractError::Unauthorized)
    ));
    assert!(chain.execute(ALICE, grant).is_ok());
}

#[test]
fn handing_off_factory_admin_ends_minting() {
    let mut chain = setup();
    let denom = denom(&chain);
    set_minter(&mut chain, ALICE, 100);

    chain
        .execute(
            OWNER,
            ExecuteMsg::ChangeTokenFactoryAdmin {
                new_admin: CAROL.to_string(),
            },
        )
        .unwrap();
    assert_eq!(chain.bank.admin_of(&denom), Some(&Addr::unchecked(CAROL)));

    let admin: TokenFactoryAdminResponse = chain.query(QueryMsg::TokenFactoryAdmin {}).unwrap();
    assert_eq!(admin.address, CAROL);

    let err = mint(&mut chain, ALICE, ALICE, 10).unwrap_err();
    assert!(matches!(err, ContractError::Host(_)));
    assert_eq!(mint_allowance(&chain, ALICE), Uint128::new(100));
}

#[test]
fn denom_metadata_must_describe_the_managed_denom() {
    let mut chain = setup();
    let denom = denom(&chain);
    let metadata = DenomMetadata {
        description: "Issued dollar".to_string(),
        denom_units: vec![
            DenomUnit {
                denom: denom.clone(),
                exponent: 0,
                aliases: vec![],
            },
            DenomUnit {
                denom: "usd".to_string(),
                exponent: 6,
                aliases: vec!["dollar".to_string()],
            },
        ],
        base: denom.clone(),
        display: "usd".to_string(),
        name: "Issued Dollar".to_string(),
        symbol: "IUSD".to_string(),
    };

    let wrong = DenomMetadata {
        base: "uatom".to_string(),
        ..metadata.clone()
    };
    assert!(matches!(
        chain.execute(OWNER, ExecuteMsg::SetDenomMetadata { metadata: wrong }),
        Err(ContractError::InvalidArgument(_))
    ));

    chain
        .execute(
            OWNER,
            ExecuteMsg::SetDenomMetadata {
                metadata: metadata.clone(),
            },
        )
        .unwrap();
    assert_eq!(chain.bank.metadata_of(&denom), Some(&metadata));
}

#[test]
fn issuer_cannot_blacklist_itself() {
    let mut chain = setup();
    let contract = chain.contract_addr().to_string();

    let err = chain
        .execute(
            OWNER,
            ExecuteMsg::Blacklist {
                address: contract.clone(),
                status: true,
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));

    // clearing is harmless
    assert!(chain
        .execute(
            OWNER,
            ExecuteMsg::Blacklist {
                address: contract,
                status: false,
            },
        )
        .is_ok());
}

#[test]
fn events_carry_block_context() {
    let mut chain = setup();
    let res = set_minter(&mut chain, ALICE, 7);
    let event = &res.events[0];

    assert_eq!(event.actor, Addr::unchecked(OWNER));
    assert_eq!(event.height, chain.env.block.height);
    assert_eq!(event.at.timestamp() as u64, chain.env.block.time.seconds());
    assert_eq!(event.kind.action(), "set_minter");
}

fn force_transfer(
    chain: &mut MockChain,
    sender: &str,
    from: &str,
    to: &str,
    amount: u128,
) -> Result<Response, ContractError> {
    chain.execute(
        sender,
        ExecuteMsg::ForceTransfer {
            amount: Uint128::new(amount),
            from_address: from.to_string(),
            to_address: to.to_string(),
        },
    )
}

#[test]
fn owner_forces_transfer_between_holders() {
    let mut chain = setup();
    let denom = denom(&chain);
    set_minter(&mut chain, OWNER, 100);
    mint(&mut chain, OWNER, BOB, 100).unwrap();

    let res = force_transfer(&mut chain, OWNER, BOB, CAROL, 30).unwrap();
    assert_eq!(chain.balance(BOB, &denom), Uint128::new(70));
    assert_eq!(chain.balance(CAROL, &denom), Uint128::new(30));
    assert_eq!(
        res.event("force_transfer").unwrap().kind,
        EventKind::ForceTransferred {
            from: Addr::unchecked(BOB),
            to: Addr::unchecked(CAROL),
            amount: Uint128::new(30),
        }
    );

    // the host refuses to move more than the account holds
    let err = force_transfer(&mut chain, OWNER, BOB, CAROL, 71).unwrap_err();
    assert!(matches!(err, ContractError::Host(HostError::TokenFactory { .. })));
    assert_eq!(chain.balance(BOB, &denom), Uint128::new(70));
}

#[test]
fn forced_transfer_rejects_zero_and_bad_addresses() {
    let mut chain = setup();
    let err = force_transfer(&mut chain, OWNER, BOB, CAROL, 0).unwrap_err();
    assert!(matches!(err, ContractError::ZeroAmount));

    let err = force_transfer(&mut chain, OWNER, "OSMO1BOB", CAROL, 1).unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));

    // validation precedes authorization
    let err = force_transfer(&mut chain, ALICE, BOB, "x", 1).unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));
}

#[test]
fn forced_transfer_answers_to_freeze_and_blacklist() {
    let mut chain = setup();
    let denom = denom(&chain);
    set_minter(&mut chain, OWNER, 100);
    mint(&mut chain, OWNER, BOB, 100).unwrap();

    chain
        .execute(OWNER, ExecuteMsg::Freeze { status: true })
        .unwrap();
    let err = force_transfer(&mut chain, OWNER, BOB, CAROL, 10).unwrap_err();
    assert!(matches!(err, ContractError::Frozen { .. }));
    chain
        .execute(OWNER, ExecuteMsg::Freeze { status: false })
        .unwrap();

    chain
        .execute(
            OWNER,
            ExecuteMsg::Blacklist {
                address: CAROL.to_string(),
                status: true,
            },
        )
        .unwrap();
    let err = force_transfer(&mut chain, OWNER, BOB, CAROL, 10).unwrap_err();
    assert!(matches!(err, ContractError::Blacklisted { ref address } if address == CAROL));
    assert_eq!(chain.balance(BOB, &denom), Uint128::new(100));
    assert_eq!(chain.balance(CAROL, &denom), Uint128::new(0));
}
