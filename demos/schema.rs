use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use opchild_admission::core::msg::OpChildMsg;
use opchild_admission::core::params::Params;
use opchild_admission::core::types::any::Any;
use opchild_admission::core::types::dec_coin::DecCoin;
use opchild_admission::core::types::pub_key::PubKey;
use opchild_admission::msgs::add_validator::MsgAddValidator;
use opchild_admission::msgs::execute_messages::MsgExecuteMessages;
use opchild_admission::msgs::finalize_token_deposit::MsgFinalizeTokenDeposit;
use opchild_admission::msgs::initiate_token_withdrawal::MsgInitiateTokenWithdrawal;
use opchild_admission::msgs::spend_fee_pool::MsgSpendFeePool;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(OpChildMsg), &out_dir);
    export_schema(&schema_for!(Params), &out_dir);
    export_schema(&schema_for!(Any), &out_dir);
    export_schema(&schema_for!(PubKey), &out_dir);
    export_schema(&schema_for!(DecCoin), &out_dir);
    export_schema(&schema_for!(MsgExecuteMessages), &out_dir);
    export_schema(&schema_for!(MsgAddValidator), &out_dir);
    export_schema(&schema_for!(MsgSpendFeePool), &out_dir);
    export_schema(&schema_for!(MsgInitiateTokenWithdrawal), &out_dir);
    export_schema(&schema_for!(MsgFinalizeTokenDeposit), &out_dir);
}
