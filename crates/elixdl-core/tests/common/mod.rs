pub mod dico_server;
