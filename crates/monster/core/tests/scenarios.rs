//! End-to-end stat block scenarios against the standard tier table.

use monster_core::{
    AttackProfile, CountCategory, MonsterRequest, MonsterStatBlock, StatKind, ThreatLevel, Tier,
    TierTable, split_damage,
};

fn build(request: MonsterRequest) -> MonsterStatBlock {
    MonsterStatBlock::assemble(&TierTable::standard(), &request)
        .expect("request should assemble")
}

fn adventurer() -> monster_core::TierBaseline {
    *TierTable::standard().lookup(Tier::Adventurer)
}

#[test]
fn scenario_a_average_solo_matches_baseline() {
    let block = build(MonsterRequest::new(Tier::Adventurer));
    let row = adventurer();

    assert_eq!(block.threat().value(), 0);
    assert_eq!(block.threat_level(), ThreatLevel::Medium);
    assert_eq!(block.damage(), row.baseline.dmg);
    assert_eq!(*block.stats(), row.baseline);
}

#[test]
fn scenario_b_good_hp_poor_attack_cancel_out() {
    let request = MonsterRequest::builder(Tier::Adventurer)
        .good(StatKind::Hp)
        .poor(StatKind::Atk)
        .build()
        .unwrap();
    let block = build(request);
    let row = adventurer();

    assert_eq!(block.threat().value(), 0);
    assert_eq!(block.threat_level(), ThreatLevel::Medium);
    assert_eq!(block.hp(), row.baseline.hp + row.steps.hp);
    assert_eq!(block.attack_bonus(), row.baseline.atk - row.steps.atk);
    assert_eq!(block.ac(), row.baseline.ac);
    assert_eq!(block.dc(), row.baseline.dc);
    assert_eq!(block.damage(), row.baseline.dmg);
}

#[test]
fn scenario_c_area_damage_is_total_over_three() {
    let request = MonsterRequest::builder(Tier::Adventurer)
        .attacks(AttackProfile::Area)
        .build()
        .unwrap();
    let block = build(request);
    let total = adventurer().baseline.dmg;

    assert_eq!(block.total_damage(), total);
    // 24 / 3 = 8
    assert_eq!(block.damage(), 8);
    assert_eq!(
        block.damage(),
        split_damage(total, AttackProfile::attacks(3).unwrap())
    );
}

#[test]
fn scenario_d_mob_scales_before_quality() {
    let row = adventurer();
    let scaling = CountCategory::Mob.scale();

    let average = build(MonsterRequest::builder(Tier::Adventurer).count(15).build().unwrap());
    assert_eq!(average.count().category, CountCategory::Mob);
    assert_eq!(average.hp(), scaling.scale_hp(row.baseline.hp));
    assert_eq!(average.damage(), scaling.scale_dmg(row.baseline.dmg));
    assert!(average.hp() < row.baseline.hp);
    assert!(average.damage() < row.baseline.dmg);

    let good = build(
        MonsterRequest::builder(Tier::Adventurer)
            .count(15)
            .good(StatKind::Hp)
            .build()
            .unwrap(),
    );
    // 110 * 10% = 11, step 28 * 10% = 3
    assert_eq!(average.hp(), 11);
    assert_eq!(good.hp(), 14);
}

#[test]
fn threat_equals_goods_minus_poors() {
    let stats = StatKind::all();
    for goods in 0..=stats.len() {
        for poors in 0..=(stats.len() - goods) {
            let mut builder = MonsterRequest::builder(Tier::Champion);
            for &stat in &stats[..goods] {
                builder = builder.good(stat);
            }
            for &stat in &stats[goods..goods + poors] {
                builder = builder.poor(stat);
            }
            let block = build(builder.build().unwrap());
            assert_eq!(
                block.threat().value(),
                goods as i32 - poors as i32,
                "{goods} good, {poors} poor"
            );
        }
    }
}

#[test]
fn defense_flag_lowers_hp_only() {
    let plain = build(MonsterRequest::new(Tier::Journeyman));
    let defended = build(
        MonsterRequest::builder(Tier::Journeyman)
            .defense(true)
            .build()
            .unwrap(),
    );
    assert!(defended.hp() < plain.hp());
    assert_eq!(defended.ac(), plain.ac());
    assert_eq!(defended.damage(), plain.damage());
    assert_eq!(defended.threat(), plain.threat());
}

#[test]
fn army_members_keep_positive_stats() {
    let request = MonsterRequest::builder(Tier::Apprentice)
        .count(40)
        .poor(StatKind::Hp)
        .poor(StatKind::Dmg)
        .attacks(AttackProfile::attacks(4).unwrap())
        .defense(true)
        .build()
        .unwrap();
    let block = build(request);
    assert_eq!(block.count().category, CountCategory::Army);
    assert!(block.hp() >= 1);
    assert!(block.damage() >= 1);
}
