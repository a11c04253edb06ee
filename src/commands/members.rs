use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::Member;
use crate::store::SnapshotStore;
use chrono::NaiveDate;

pub fn add<S: SnapshotStore>(
    library: &mut Library,
    store: &mut S,
    name: String,
    email: String,
    phone: String,
    join_date: NaiveDate,
) -> Result<CmdResult> {
    let member = Member::new(library.next_member_id(), name, email, phone, join_date);
    library.insert_member(member.clone());
    store.save(library.snapshot())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Member added: {} ({})",
        member.name, member.id
    )));
    result.members.push(member);
    Ok(result)
}

pub fn remove<S: SnapshotStore>(library: &mut Library, store: &mut S, id: &str) -> Result<CmdResult> {
    if library.member_has_open_loans(id) {
        return Err(ShelfError::MemberInUse(id.to_string()));
    }
    let member = library
        .remove_member(id)
        .ok_or_else(|| ShelfError::MemberNotFound(id.to_string()))?;
    store.save(library.snapshot())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Member removed: {} ({})",
        member.name, member.id
    )));
    result.members.push(member);
    Ok(result)
}

pub fn list(library: &Library) -> CmdResult {
    CmdResult::default().with_members(library.members().to_vec())
}
