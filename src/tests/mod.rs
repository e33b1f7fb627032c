mod encode_walks;
