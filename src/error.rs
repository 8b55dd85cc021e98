use thiserror::Error;

use crate::model::CostType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Nenhum perfil carregado.")]
    NoProfile,
    #[error("Tarefa não encontrada: {0}")]
    TaskNotFound(String),
    #[error("A tarefa \"{0}\" já foi concluída.")]
    TaskAlreadyCompleted(String),
    #[error("Escolha a skin do item pendente antes de concluir outra tarefa.")]
    CustomizationPending,
    #[error("Você precisa de {required} {cost_type} para completar esta tarefa (você tem {available}).")]
    InsufficientFunds {
        cost_type: CostType,
        required: u64,
        available: u64,
    },
    #[error("Nenhum item aguardando instalação.")]
    NoPendingCustomization,
    #[error("O item \"{got}\" não corresponde ao item pendente \"{expected}\".")]
    ItemMismatch { expected: String, got: String },
    #[error("Item desconhecido: {0}")]
    UnknownItem(String),
    #[error("A skin \"{skin}\" não está disponível para \"{item}\".")]
    UnknownSkin { item: String, skin: String },
    #[error("O gerador de slimes está sem carga.")]
    SpawnerEmpty,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("malformed flask snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("As senhas não coincidem.")]
    PasswordMismatch,
    #[error("A senha não atende aos requisitos de segurança.")]
    WeakPassword(Vec<&'static str>),
    #[error("Informe um endereço de email válido.")]
    InvalidEmail,
    #[error("Informe um nome de usuário.")]
    EmptyUsername,
    #[error("Informe seu email ou nome de usuário.")]
    EmptyLogin,
    #[error("Este email ou nome de usuário já está em uso.")]
    AccountExists,
    /// Same message for an unknown login and a wrong password.
    #[error("Email ou Senha inválidos.")]
    InvalidCredentials,
}

pub type GameResult<T> = Result<T, GameError>;
