pub mod blatchford;
pub mod cha2ds2vasc;
pub mod childpugh;
pub mod euroscore2;
pub mod grace;
pub mod meld;
pub mod rockall;
pub mod sepsis;
pub mod timi;
